//! Telegram transport: long polling via teloxide.
//!
//! Every text message is turned into an [`Inbound`] event for the dialogue
//! controller and the reply is sent back to the same chat. Drafts are keyed
//! by the sender, so members of one group chat fill in separate forms.

use std::str::FromStr;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use teloxide::prelude::*;
use teloxide::types::{BotCommand as MenuCommand, Me};
use tracing::Instrument;

use meetbot_observe::SPAN_HANDLE_MESSAGE;
use meetbot_types::dialogue::{Command, Inbound};
use meetbot_types::meeting::UserId;

use crate::state::ConcreteController;

/// Draft key for a message: the sender, or the chat for sender-less posts
/// (channel posts, anonymous group admins).
pub fn draft_key(sender: Option<teloxide::types::UserId>, chat: ChatId) -> UserId {
    match sender {
        Some(id) => UserId(id.0 as i64),
        None => UserId(chat.0),
    }
}

/// Characters Telegram accepts in command and bot names.
fn is_command_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Turn message text into a controller event.
///
/// Only `/name` or `/name@bot` followed by whitespace or end of text counts
/// as a command; anything else (`/`, `/ 25.12.2024`) is form input.
/// Arguments after the command are ignored. Returns `None` for unknown
/// commands and for commands addressed to another bot.
pub fn parse_inbound(text: &str, bot_username: &str) -> Option<Inbound> {
    let as_text = || Some(Inbound::Text(text.to_string()));

    let Some(rest) = text.strip_prefix('/') else {
        return as_text();
    };

    let word = rest.split_whitespace().next().unwrap_or_default();
    if !rest.starts_with(word) {
        return as_text();
    }

    let (name, addressee) = match word.split_once('@') {
        Some((name, addressee)) => (name, Some(addressee)),
        None => (word, None),
    };
    if !is_command_name(name) || !addressee.is_none_or(is_command_name) {
        return as_text();
    }

    if addressee.is_some_and(|a| !a.eq_ignore_ascii_case(bot_username)) {
        return None;
    }

    Command::from_str(name).ok().map(Inbound::Command)
}

/// Command menu entries registered with Telegram.
pub fn menu_commands() -> Vec<MenuCommand> {
    Command::ALL
        .iter()
        .map(|command| MenuCommand::new(command.to_string(), command.description()))
        .collect()
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    me: Me,
    controller: Arc<ConcreteController>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let user = draft_key(msg.from.as_ref().map(|u| u.id), msg.chat.id);
    let Some(inbound) = parse_inbound(text, me.username()) else {
        tracing::debug!(user_id = %user, text = %text, "Ignoring command not meant for this bot");
        return Ok(());
    };

    let span = tracing::info_span!(SPAN_HANDLE_MESSAGE, user_id = %user);
    let reply = controller.handle(user, inbound).instrument(span).await;

    bot.send_message(msg.chat.id, reply.text).await?;
    Ok(())
}

/// Poll Telegram until ctrl-c.
pub async fn run(token: &SecretString, controller: Arc<ConcreteController>, register_commands: bool) {
    let bot = Bot::new(token.expose_secret());

    if register_commands {
        match bot.set_my_commands(menu_commands()).await {
            Ok(_) => tracing::info!("Bot commands registered"),
            Err(e) => tracing::warn!(error = %e, "Failed to register bot commands"),
        }
    }

    tracing::info!("Bot started, polling for updates");

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Bot stopped");
}
