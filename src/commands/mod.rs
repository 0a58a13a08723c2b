//! Command dispatch and handlers.

use crate::cli::Command;
use crate::mint::Minter;

/// Dispatch a parsed command to its handler over live ports.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let minter = Minter::live();
    for line in render(command, &minter) {
        println!("{line}");
    }
    Ok(())
}

/// Render the identifiers a command asks for, one per output line.
fn render(command: &Command, minter: &Minter) -> Vec<String> {
    match command {
        Command::Token { prefix, count } => (0..*count)
            .map(|_| minter.generate(prefix.as_deref().unwrap_or_default()))
            .collect(),
        Command::Short { count } => (0..*count).map(|_| minter.short()).collect(),
        Command::Uuid { count } => (0..*count).map(|_| minter.uuid()).collect(),
        Command::Stamp { count } => (0..*count).map(|_| minter.timestamp()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::adapters::scripted::{FixedClock, ScriptedRandomSource};

    fn scripted_minter(script: Vec<u8>) -> Minter {
        let clock = FixedClock(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
        Minter::new(Box::new(ScriptedRandomSource::new(script)), Box::new(clock))
    }

    #[test]
    fn token_command_renders_prefixed_lines() {
        let minter = scripted_minter((0..24).collect());
        let command = Command::Token { prefix: Some("job".into()), count: 2 };
        let lines = render(&command, &minter);

        assert_eq!(
            lines,
            vec![
                "job_000102030405060708090a0b".to_string(),
                "job_0c0d0e0f1011121314151617".to_string(),
            ]
        );
    }

    #[test]
    fn token_command_without_prefix_renders_bare_hex() {
        let minter = scripted_minter((0..12).collect());
        let command = Command::Token { prefix: None, count: 1 };
        let lines = render(&command, &minter);

        assert_eq!(lines, vec!["000102030405060708090a0b".to_string()]);
    }

    #[test]
    fn stamp_command_uses_clock_millis() {
        let minter = scripted_minter(vec![0xde, 0xad, 0xbe, 0xef]);
        let command = Command::Stamp { count: 1 };
        let lines = render(&command, &minter);

        assert_eq!(lines, vec!["1700000000000-deadbeef".to_string()]);
    }

    #[test]
    fn count_controls_number_of_lines() {
        let minter = Minter::live();
        let command = Command::Uuid { count: 3 };
        assert_eq!(render(&command, &minter).len(), 3);
    }

    #[test]
    fn dispatch_succeeds_over_live_ports() {
        let command = Command::Short { count: 1 };
        assert!(dispatch(&command).is_ok());
    }
}
