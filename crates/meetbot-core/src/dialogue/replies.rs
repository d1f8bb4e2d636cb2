//! User-facing reply texts.

use meetbot_types::config::DialogueConfig;
use meetbot_types::meeting::{CommitOutcome, Draft, PersistFailure, StoredMeeting};

pub const START: &str = "👋 Привет! Я бот для создания встреч.\n\n\
    Доступные команды:\n\
    /create - Создать новую встречу\n\
    /list - Показать все встречи\n\
    /help - Показать справку\n\
    /cancel - Отменить создание встречи";

pub const HELP: &str = "📚 Справка по командам:\n\n\
    /start - Начать работу с ботом\n\
    /create - Создать новую встречу\n\
    /list - Показать все встречи\n\
    /help - Показать эту справку\n\
    /cancel - Отменить создание встречи\n\n\
    💡 Для создания встречи используйте команду /create";

/// Reply to plain text from a user with no draft.
pub const NO_DRAFT_HINT: &str = "💡 Используйте команду /create для создания встречи\n\
    Или /help для справки";

pub const TITLE_PROMPT: &str = "📝 Создание новой встречи\n\nВведите название встречи:";

pub const DATETIME_PROMPT: &str = "📅 Введите дату и время встречи в формате ДД.ММ.ГГГГ ЧЧ:ММ\n\
    Например: 25.12.2024 14:30";

pub const CANCELLED: &str = "❌ Создание встречи отменено.";

pub const NOTHING_TO_CANCEL: &str =
    "🤷‍♂️ Нечего отменять. Используйте /create для создания встречи.";

pub const DECLINED: &str = "❌ Создание встречи отменено.\n\
    💡 Используйте /create для создания новой встречи";

pub const LIST_EMPTY: &str = "📋 Пока что нет созданных встреч.\n\n\
    💡 Используйте /create для создания первой встречи!";

pub const LIST_UNAVAILABLE: &str = "⚠️ Не удалось подключиться к базе данных.\n\n\
    💡 Используйте /create для создания встречи!";

pub const LIST_FAILED: &str = "❌ Ошибка при получении списка встреч.\n\n\
    💡 Используйте /create для создания встречи!";

pub const INTERNAL_ERROR: &str = "⚠️ Что-то пошло не так. Попробуйте начать заново: /create";

const NOT_SPECIFIED: &str = "Не указано";
const CREATE_AGAIN: &str = "💡 Используйте /create для создания новой встречи";

pub fn description_prompt(tokens: &DialogueConfig) -> String {
    format!(
        "📝 Введите описание встречи (или напишите '{}' для пропуска):",
        tokens.no_token
    )
}

fn description_or_placeholder(draft: &Draft) -> &str {
    match draft.description.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => NOT_SPECIFIED,
    }
}

/// Review of all collected fields, asking for confirmation.
pub fn review(draft: &Draft, tokens: &DialogueConfig) -> String {
    format!(
        "📋 Проверьте информацию о встрече:\n\n\
         🎯 Название: {}\n\
         📝 Описание: {}\n\
         📅 Дата и время: {}\n\n\
         Все верно? Напишите '{}' для создания или '{}' для отмены.",
        draft.title.as_deref().unwrap_or_default(),
        description_or_placeholder(draft),
        draft.datetime.as_deref().unwrap_or_default(),
        tokens.yes_token,
        tokens.no_token,
    )
}

/// Reply after a confirmed draft, phrased by how the commit went.
pub fn created(draft: &Draft, outcome: &CommitOutcome) -> String {
    let title = draft.title.as_deref().unwrap_or_default();
    let datetime = draft.datetime.as_deref().unwrap_or_default();
    let description = description_or_placeholder(draft);

    match outcome {
        CommitOutcome::Persisted { meeting_id } => format!(
            "✅ Встреча '{title}' успешно создана и сохранена!\n\n\
             📅 Дата: {datetime}\n\
             📝 Описание: {description}\n\
             🆔 ID встречи: {meeting_id}\n\n\
             {CREATE_AGAIN}"
        ),
        CommitOutcome::NotPersisted {
            reason: PersistFailure::StoreUnavailable,
        } => format!(
            "✅ Встреча '{title}' успешно создана!\n\n\
             📅 Дата: {datetime}\n\
             📝 Описание: {description}\n\n\
             ⚠️ Данные не сохранены (ошибка подключения к Google Sheets)\n\n\
             {CREATE_AGAIN}"
        ),
        CommitOutcome::NotPersisted {
            reason: PersistFailure::StoreFailed(_),
        } => format!(
            "✅ Встреча '{title}' создана!\n\n\
             📅 Дата: {datetime}\n\
             📝 Описание: {description}\n\n\
             ⚠️ Ошибка при сохранении в базу данных\n\n\
             {CREATE_AGAIN}"
        ),
    }
}

/// One entry per stored meeting, in store order.
///
/// Callers handle the empty case with [`LIST_EMPTY`].
pub fn meeting_list(meetings: &[StoredMeeting]) -> String {
    let mut text = String::from("📋 Список всех встреч:\n\n");
    for meeting in meetings {
        let glyph = if meeting.is_active() { "✅" } else { "❌" };
        text.push_str(&format!(
            "{glyph} {}\n",
            meeting.title.as_deref().unwrap_or("Без названия")
        ));
        text.push_str(&format!(
            "📅 {}\n",
            meeting.datetime.as_deref().unwrap_or("Дата не указана")
        ));
        if let Some(description) = meeting.description.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!("📝 {description}\n"));
        }
        text.push_str(&format!(
            "🆔 ID: {}\n\n",
            meeting.meeting_id.as_deref().unwrap_or("N/A")
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetbot_types::meeting::Step;

    fn draft(description: &str) -> Draft {
        Draft {
            step: Step::Confirm,
            title: Some("Team Sync".to_string()),
            description: Some(description.to_string()),
            datetime: Some("25.12.2024 14:30".to_string()),
        }
    }

    #[test]
    fn test_review_uses_placeholder_for_skipped_description() {
        let text = review(&draft(""), &DialogueConfig::default());
        assert!(text.contains("🎯 Название: Team Sync"));
        assert!(text.contains("📝 Описание: Не указано"));
        assert!(text.contains("📅 Дата и время: 25.12.2024 14:30"));
        assert!(text.contains("'да'"));
        assert!(text.contains("'нет'"));
    }

    #[test]
    fn test_created_persisted_includes_id() {
        let text = created(&draft("Weekly"), &CommitOutcome::Persisted { meeting_id: 12 });
        assert!(text.contains("успешно создана и сохранена"));
        assert!(text.contains("🆔 ID встречи: 12"));
        assert!(!text.contains("⚠️"));
    }

    #[test]
    fn test_created_not_persisted_warns() {
        let unavailable = created(
            &draft("Weekly"),
            &CommitOutcome::NotPersisted {
                reason: PersistFailure::StoreUnavailable,
            },
        );
        assert!(unavailable.contains("Данные не сохранены"));
        assert!(!unavailable.contains("ID встречи"));

        let failed = created(
            &draft("Weekly"),
            &CommitOutcome::NotPersisted {
                reason: PersistFailure::StoreFailed("timeout".to_string()),
            },
        );
        assert!(failed.contains("Ошибка при сохранении"));
        assert!(!failed.contains("timeout"));
    }

    #[test]
    fn test_meeting_list_formats_each_entry() {
        let meetings = vec![
            StoredMeeting {
                meeting_id: Some("1".to_string()),
                title: Some("Kickoff".to_string()),
                description: Some("Agenda".to_string()),
                datetime: Some("01.02.2025 09:00".to_string()),
                status: Some("active".to_string()),
            },
            StoredMeeting {
                meeting_id: Some("2".to_string()),
                title: Some("Retro".to_string()),
                description: Some(String::new()),
                datetime: Some("03.02.2025 17:00".to_string()),
                status: Some("cancelled".to_string()),
            },
        ];

        let text = meeting_list(&meetings);

        assert!(text.contains("✅ Kickoff\n📅 01.02.2025 09:00\n📝 Agenda\n🆔 ID: 1"));
        assert!(text.contains("❌ Retro\n📅 03.02.2025 17:00\n🆔 ID: 2"));
        assert!(text.find("Kickoff").unwrap() < text.find("Retro").unwrap());
    }

    #[test]
    fn test_meeting_list_defaults_for_missing_fields() {
        let text = meeting_list(&[StoredMeeting::default()]);
        assert!(text.contains("❌ Без названия"));
        assert!(text.contains("📅 Дата не указана"));
        assert!(text.contains("🆔 ID: N/A"));
        assert!(!text.contains("📝"));
    }
}
