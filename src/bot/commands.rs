use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Whale scanner commands:")]
pub enum Command {
    #[command(description = "Introduce the bot")]
    Start,
    #[command(description = "Show this help")]
    Help,
    #[command(description = "Report the latest scan cycle")]
    Status,
}
