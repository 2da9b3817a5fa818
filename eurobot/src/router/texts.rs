//! User-facing reply texts.

pub const WELCOME: &str = "Привет!\n\
Здесь ты можешь узнать всю информацию про страны Европы.\n\
Этот бот может быть полезен для домашних заданий или если лень гуглить.\n\n\
Доступные команды:\n\
/European_countries - Список всех стран Европы\n\
/regions - Список стран по регионам\n\
/help - Помощь\n\n\
Чтобы узнать о стране, напиши ее название на английском через слэш, например: /Russia";

pub const HELP: &str = "КАК ПОЛЬЗОВАТЬСЯ БОТОМ:\n\n\
1. Просмотр всех стран:\n   \
/European_countries - все страны Европы\n   \
/regions - страны по регионам\n\n\
2. Получение информации о стране:\n   \
/[Название_страны_на_английском]\n   \
Пример: /France, /Germany, /Italy\n\n\
3. После выбора страны используйте кнопки для получения конкретной информации.";

pub const STORAGE_UNAVAILABLE: &str = "База данных стран недоступна.\n\
Попробуйте позже или попросите администратора запустить заполнение базы данных.";

pub const DATABASE_EMPTY: &str =
    "База данных стран пуста. Запустите заполнение базы данных.";

pub const CHOOSE_REGION: &str = "Выберите регион:";

pub const CHOOSE_ANOTHER: &str = "Выберите другую страну, используя команду /[название_страны] \
или /European_countries для списка всех стран.";

pub const SELECT_FIRST: &str = "Пожалуйста, сначала выберите страну";

pub const COUNTRY_GONE: &str = "Ошибка: страна не найдена";

pub const UNKNOWN_REQUEST: &str = "Неизвестный запрос";

pub const UNKNOWN_REGION: &str = "Неизвестный регион";

pub const ALL_BUTTON: &str = "Всё сразу";

pub const CHANGE_BUTTON: &str = "Выбрать другую";

pub fn selected(name: &str) -> String {
    format!("Вы выбрали: {}\nЧто вы хотите узнать об этой стране?", name)
}

pub fn not_found(key: &str) -> String {
    format!(
        "Страна '{}' не найдена.\n\
         Используйте команду /European_countries для просмотра всех доступных стран.",
        key
    )
}

pub fn region_empty(region: &str) -> String {
    format!("Нет стран в регионе {}", region)
}
