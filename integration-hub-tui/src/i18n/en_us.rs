//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ConnectionTexts, HelpTexts, HintTexts, HomeTexts, ListTexts, ModalTexts,
    NavTexts, NotifyTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Integration Hub",
        loading: "Loading...",
        no_data: "No data",
        error: "Error",
        on: "on",
        off: "off",
        all: "all",
        yes: "Yes",
        no: "No",
    },

    nav: NavTexts {
        title: "Menu",
        home: "Home",
        workflow_runs: "Workflow runs",
        running_runs: "Running",
        timeline: "Timeline",
        deal_changes: "Deal changes",
        documents: "ERP documents",
        connection: "ERP connection",
    },

    home: HomeTexts {
        welcome: "Integration Hub",
        description: "CRM workflow monitoring and ERP document synchronisation",
        session: "Session",
        signed_in: "signed in",
        signed_out: "signed out",
        refresh_interval: "Auto-refresh interval",
        log_file: "Log file",
        diagnostics: "Last diagnostics",
        no_diagnostics: "Run a diagnostic from the workflow runs page (t / g)",
    },

    list: ListTexts {
        records: "records",
        auto_refresh: "Auto-refresh",
        search: "Search",
        search_placeholder: "press / to search",
        status: "Status",
        source: "Source",
        detail: "Detail",
        detail_loading: "Loading detail...",
        no_records: "No records",
        no_matches: "Nothing matches the search",
        actions: "Actions",
    },

    connection: ConnectionTexts {
        active: "Active connection",
        name: "Name",
        url: "URL",
        username: "Username",
        status: "Status",
        online: "online",
        offline: "offline",
        unknown: "not tested",
        not_configured: "No connection configured. Press e to add one.",
    },

    modal: ModalTexts {
        login_title: "Sign in",
        username: "Username",
        password: "Password",
        logging_in: "Signing in...",
        rollback_title: "Roll back deal stage",
        deal_id: "Deal ID",
        target_stage_id: "Target stage ID",
        history_title: "Deal history",
        no_history: "No history entries",
        check_deal_title: "Check CRM deal",
        sync_title: "Sync documents from ERP",
        limit: "Batch size",
        clear_title: "Clear documents",
        clear_confirm: "Delete every synced document? (Enter = yes, Esc = no)",
        connection_title: "ERP connection",
        url: "URL",
        diagnostics_title: "Diagnostics",
        help_title: "Keyboard shortcuts",
        submit_hint: "Tab next field · Enter submit · Esc cancel",
    },

    notify: NotifyTexts {
        login_ok: "Signed in",
        logged_out: "Signed out",
        documents_synced: "Documents synced:",
        documents_cleared: "Documents cleared:",
        deal_created: "CRM deal created:",
        deal_exists: "Deal exists in CRM:",
        deal_missing: "Deal not found in CRM:",
        crm_synced: "CRM sync finished",
        document_enriched: "Document enriched:",
        enrich_all_done: "Enrichment finished, ok / failed:",
        enrich_nothing: "Every document already has customer data",
        exported: "Exported to",
        rollback_done: "Rollback finished",
        users_enriched: "Users processed:",
        direct_api: "Direct API runs:",
        connection_saved: "Connection saved",
        connection_online: "ERP connection is online",
        connection_offline: "ERP connection is offline",
        auto_refresh_on: "Auto-refresh on",
        auto_refresh_off: "Auto-refresh off",
        auto_refresh_unavailable: "This list has no auto-refresh",
        no_selection: "Select a record first",
    },

    hints: HintTexts {
        switch_panel: "Panel",
        navigate: "Move",
        open: "Open",
        expand: "Expand",
        reload: "Reload",
        auto_refresh: "Auto",
        search: "Search",
        status: "Status",
        source: "Source",
        actions: "Actions",
        help: "Help",
        quit: "Quit",
        next_field: "Next",
        confirm: "Confirm",
        cancel: "Cancel",
    },

    help: HelpTexts {
        global: "Global",
        lists: "Lists",
        documents: "ERP documents",
        deals: "Deal changes",
        runs: "Workflow runs",
        connection: "ERP connection",
        lines_global: &[
            ("Tab", "switch panel"),
            ("?", "this help"),
            ("Alt+l", "sign out"),
            ("q / Ctrl+c", "quit"),
        ],
        lines_lists: &[
            ("↑↓ / j k", "move"),
            ("Enter", "expand / collapse"),
            ("r", "reload"),
            ("a", "toggle auto-refresh"),
            ("/", "search"),
            ("s", "cycle status filter"),
            ("m", "switch source api / db"),
        ],
        lines_documents: &[
            ("y", "sync from ERP"),
            ("X", "clear all"),
            ("n", "create CRM deal"),
            ("v", "check CRM deal"),
            ("b", "sync with CRM"),
            ("e / E", "enrich one / all"),
            ("x", "export to JSON"),
        ],
        lines_deals: &[
            ("o", "roll back stage"),
            ("u", "enrich users"),
            ("h", "deal history"),
        ],
        lines_runs: &[("t", "test direct API"), ("g", "check DB tables")],
        lines_connection: &[("t", "test"), ("e", "edit")],
    },
};
