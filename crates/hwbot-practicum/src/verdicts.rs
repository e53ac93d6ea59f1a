//! The verdict table: review status code -> notification text.
//! Closed set, fixed by the Practicum API contract; not configurable.

/// All review statuses the API is documented to return, with the
/// human-readable verdict the bot forwards for each.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Look up the verdict text for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}
