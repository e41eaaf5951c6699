use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse("   ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_text() {
    assert!(SlashCommand::parse("is this link safe?").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_quit() {
    assert!(SlashCommand::parse("/q").unwrap().is_quit());
    assert!(SlashCommand::parse("/quit").unwrap().is_quit());
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}

#[test]
fn it_is_attach_with_path() {
    let cmd = SlashCommand::parse("/attach ./my pictures/cat.png").unwrap();
    assert!(cmd.is_attach());
    assert_eq!(cmd.rest(), "./my pictures/cat.png");

    assert!(SlashCommand::parse("/f cat.png").unwrap().is_attach());
}

#[test]
fn it_is_detach() {
    assert!(SlashCommand::parse("/detach").unwrap().is_detach());
}

#[test]
fn it_is_copy() {
    let cmd = SlashCommand::parse("/copy 2").unwrap();
    assert!(cmd.is_copy());
    assert_eq!(cmd.message_number(), Some(2));
    assert!(SlashCommand::parse("/c 1").unwrap().is_copy());
}

#[test]
fn it_is_edit() {
    assert!(SlashCommand::parse("/e 1").unwrap().is_edit());
    assert!(SlashCommand::parse("/edit 1").unwrap().is_edit());
}

#[test]
fn it_is_delete() {
    assert!(SlashCommand::parse("/d 1").unwrap().is_delete());
    assert!(SlashCommand::parse("/delete 1").unwrap().is_delete());
}

#[test]
fn it_is_theme() {
    assert!(SlashCommand::parse("/t").unwrap().is_theme());
    assert!(SlashCommand::parse("/theme").unwrap().is_theme());
}

#[test]
fn it_is_voice() {
    assert!(SlashCommand::parse("/v").unwrap().is_voice());
    assert!(SlashCommand::parse("/voice").unwrap().is_voice());
}

#[test]
fn it_rejects_invalid_message_numbers() {
    assert_eq!(SlashCommand::parse("/copy").unwrap().message_number(), None);
    assert_eq!(SlashCommand::parse("/copy 0").unwrap().message_number(), None);
    assert_eq!(SlashCommand::parse("/copy two").unwrap().message_number(), None);
}
