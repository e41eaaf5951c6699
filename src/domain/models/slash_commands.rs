#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_attach()
            || cmd.is_detach()
            || cmd.is_copy()
            || cmd.is_edit()
            || cmd.is_delete()
            || cmd.is_theme()
            || cmd.is_voice()
        {
            return Some(cmd);
        }

        return None;
    }

    /// Arguments joined back together, paths may contain spaces.
    pub fn rest(&self) -> String {
        return self.args.join(" ");
    }

    /// First argument as a 1-based message number.
    pub fn message_number(&self) -> Option<usize> {
        let number = self.args.first()?.parse::<usize>().ok()?;
        if number == 0 {
            return None;
        }

        return Some(number);
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_attach(&self) -> bool {
        return ["/f", "/attach"].contains(&self.command.as_str());
    }

    pub fn is_detach(&self) -> bool {
        return ["/detach"].contains(&self.command.as_str());
    }

    pub fn is_copy(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str());
    }

    pub fn is_edit(&self) -> bool {
        return ["/e", "/edit"].contains(&self.command.as_str());
    }

    pub fn is_delete(&self) -> bool {
        return ["/d", "/delete"].contains(&self.command.as_str());
    }

    pub fn is_theme(&self) -> bool {
        return ["/t", "/theme"].contains(&self.command.as_str());
    }

    pub fn is_voice(&self) -> bool {
        return ["/v", "/voice"].contains(&self.command.as_str());
    }
}
