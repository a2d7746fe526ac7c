//! 俄文翻译 (ru-RU)

use super::keys::{
    CommonTexts, ConnectionTexts, HelpTexts, HintTexts, HomeTexts, ListTexts, ModalTexts,
    NavTexts, NotifyTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Integration Hub",
        loading: "Загрузка...",
        no_data: "Нет данных",
        error: "Ошибка",
        on: "вкл",
        off: "выкл",
        all: "все",
        yes: "Да",
        no: "Нет",
    },

    nav: NavTexts {
        title: "Меню",
        home: "Главная",
        workflow_runs: "Бизнес-процессы",
        running_runs: "Запущенные",
        timeline: "Таймлайн",
        deal_changes: "Изменения сделок",
        documents: "Документы 1С",
        connection: "Подключение 1С",
    },

    home: HomeTexts {
        welcome: "Integration Hub",
        description: "Мониторинг бизнес-процессов и синхронизация документов 1С",
        session: "Сессия",
        signed_in: "вход выполнен",
        signed_out: "вход не выполнен",
        refresh_interval: "Интервал автообновления",
        log_file: "Файл журнала",
        diagnostics: "Последняя диагностика",
        no_diagnostics: "Запустите диагностику на странице бизнес-процессов (t / g)",
    },

    list: ListTexts {
        records: "записей",
        auto_refresh: "Автообновление",
        search: "Поиск",
        search_placeholder: "нажмите / для поиска",
        status: "Статус",
        source: "Источник",
        detail: "Подробности",
        detail_loading: "Загрузка подробностей...",
        no_records: "Нет записей",
        no_matches: "Ничего не найдено",
        actions: "Действия",
    },

    connection: ConnectionTexts {
        active: "Активное подключение",
        name: "Название",
        url: "URL",
        username: "Пользователь",
        status: "Статус",
        online: "онлайн",
        offline: "офлайн",
        unknown: "не проверено",
        not_configured: "Подключение не настроено. Нажмите e, чтобы добавить.",
    },

    modal: ModalTexts {
        login_title: "Вход",
        username: "Логин",
        password: "Пароль",
        logging_in: "Вход...",
        rollback_title: "Откат стадии сделки",
        deal_id: "ID сделки",
        target_stage_id: "ID целевой стадии",
        history_title: "История сделки",
        no_history: "История пуста",
        check_deal_title: "Проверить сделку в CRM",
        sync_title: "Синхронизация документов из 1С",
        limit: "Размер пакета",
        clear_title: "Очистка документов",
        clear_confirm: "Удалить все загруженные документы? (Enter = да, Esc = нет)",
        connection_title: "Подключение к 1С",
        url: "URL",
        diagnostics_title: "Диагностика",
        help_title: "Горячие клавиши",
        submit_hint: "Tab следующее поле · Enter отправить · Esc отмена",
    },

    notify: NotifyTexts {
        login_ok: "Вход выполнен",
        logged_out: "Выход выполнен",
        documents_synced: "Загружено документов:",
        documents_cleared: "Удалено документов:",
        deal_created: "Создана сделка:",
        deal_exists: "Сделка найдена в CRM:",
        deal_missing: "Сделка не найдена в CRM:",
        crm_synced: "Синхронизация с CRM завершена",
        document_enriched: "Документ обогащён:",
        enrich_all_done: "Обогащение завершено, успешно / ошибок:",
        enrich_nothing: "У всех документов уже есть данные клиента",
        exported: "Экспортировано в",
        rollback_done: "Откат выполнен",
        users_enriched: "Обработано пользователей:",
        direct_api: "Процессов через API:",
        connection_saved: "Подключение сохранено",
        connection_online: "Подключение к 1С активно",
        connection_offline: "Подключение к 1С недоступно",
        auto_refresh_on: "Автообновление включено",
        auto_refresh_off: "Автообновление выключено",
        auto_refresh_unavailable: "Для этого списка нет автообновления",
        no_selection: "Сначала выберите запись",
    },

    hints: HintTexts {
        switch_panel: "Панель",
        navigate: "Выбор",
        open: "Открыть",
        expand: "Раскрыть",
        reload: "Обновить",
        auto_refresh: "Авто",
        search: "Поиск",
        status: "Статус",
        source: "Источник",
        actions: "Действия",
        help: "Справка",
        quit: "Выход",
        next_field: "Далее",
        confirm: "ОК",
        cancel: "Отмена",
    },

    help: HelpTexts {
        global: "Общие",
        lists: "Списки",
        documents: "Документы 1С",
        deals: "Изменения сделок",
        runs: "Бизнес-процессы",
        connection: "Подключение 1С",
        lines_global: &[
            ("Tab", "сменить панель"),
            ("?", "эта справка"),
            ("Alt+l", "выйти из аккаунта"),
            ("q / Ctrl+c", "выход"),
        ],
        lines_lists: &[
            ("↑↓ / j k", "перемещение"),
            ("Enter", "раскрыть / свернуть"),
            ("r", "обновить"),
            ("a", "автообновление"),
            ("/", "поиск"),
            ("s", "фильтр статуса"),
            ("m", "источник api / db"),
        ],
        lines_documents: &[
            ("y", "загрузить из 1С"),
            ("X", "очистить всё"),
            ("n", "создать сделку"),
            ("v", "проверить сделку"),
            ("b", "синхронизация с CRM"),
            ("e / E", "обогатить один / все"),
            ("x", "экспорт в JSON"),
        ],
        lines_deals: &[
            ("o", "откат стадии"),
            ("u", "обогатить пользователей"),
            ("h", "история сделки"),
        ],
        lines_runs: &[("t", "тест API"), ("g", "проверка таблиц БД")],
        lines_connection: &[("t", "проверить"), ("e", "изменить")],
    },
};
