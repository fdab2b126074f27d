use crate::domain::models::LaunchOutcome;

#[must_use]
pub fn get_suggestions(outcome: &LaunchOutcome, command: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let program = command.split_whitespace().next().unwrap_or(command);

    match outcome {
        LaunchOutcome::Exited(127) => {
            suggestions.push(format!("'{program}' is not installed or not on PATH"));
        }
        LaunchOutcome::Exited(126) => {
            suggestions.push(format!("'{program}' is not executable; check its permissions"));
        }
        LaunchOutcome::SpawnFailed(msg) => {
            let msg_lower = msg.to_lowercase();
            if msg_lower.contains("no such file") || msg_lower.contains("not found") {
                suggestions.push(format!("Install '{program}' or fix its path in config.toml"));
            }
            if msg_lower.contains("permission denied") {
                suggestions.push(format!("'{program}' is not executable; check its permissions"));
            }
        }
        LaunchOutcome::Signalled => {
            suggestions.push("The program crashed; run it from a terminal to see why".to_string());
        }
        _ => {}
    }

    if program == "pkexec" && matches!(outcome, LaunchOutcome::Exited(126 | 127)) {
        suggestions.push("Authentication was cancelled or polkit is not running".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions(&LaunchOutcome::Exited(127), "steam -silent");
        assert!(s.contains(&"'steam' is not installed or not on PATH".to_string()));

        let s = get_suggestions(
            &LaunchOutcome::SpawnFailed("No such file or directory (os error 2)".to_string()),
            "/usr/bin/vlc",
        );
        assert!(s[0].contains("/usr/bin/vlc"));

        let s = get_suggestions(&LaunchOutcome::Exited(126), "pkexec systemctl reboot");
        assert_eq!(s.len(), 2);

        assert!(get_suggestions(&LaunchOutcome::Exited(1), "false").is_empty());
    }
}
