#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    /* optional trailing window in days: `/stats 30` */
    Stats(Option<i64>),
}

#[doc = r#"
    Parses `/start` and `/stats [days]`, with or without a `@botname` suffix.

    Returns `None` for plain text and for commands this bot does not know.
    A non-numeric or non-positive `/stats` argument is ignored.
"#]
pub fn parse_bot_command(text: &str) -> Option<BotCommand> {
    let mut parts = text.split_whitespace();
    let head: &str = parts.next()?;
    let name: &str = head.strip_prefix('/')?;
    let name: &str = name.split('@').next().unwrap_or(name);

    match name {
        "start" => Some(BotCommand::Start),
        "stats" => {
            let days: Option<i64> = parts
                .next()
                .and_then(|arg| arg.parse::<i64>().ok())
                .filter(|days| *days > 0);
            Some(BotCommand::Stats(days))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_bot_command("/start"), Some(BotCommand::Start));
        assert_eq!(parse_bot_command("/stats"), Some(BotCommand::Stats(None)));
        assert_eq!(parse_bot_command("/stats@weight_bot"), Some(BotCommand::Stats(None)));
        assert_eq!(parse_bot_command("/stats 30"), Some(BotCommand::Stats(Some(30))));
        assert_eq!(parse_bot_command("  /start@weight_bot  "), Some(BotCommand::Start));
    }

    #[test]
    fn ignores_bad_arguments_and_unknown_commands() {
        assert_eq!(parse_bot_command("/stats soon"), Some(BotCommand::Stats(None)));
        assert_eq!(parse_bot_command("/stats -3"), Some(BotCommand::Stats(None)));
        assert_eq!(parse_bot_command("/help"), None);
        assert_eq!(parse_bot_command("85.2"), None);
        assert_eq!(parse_bot_command(""), None);
    }
}
