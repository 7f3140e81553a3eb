use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

/// Commands accepted on the administrative console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Stop,
}

impl ConsoleCommand {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }
}

/// Reads console lines until `stop` arrives. Returns `false` if input ends first,
/// in which case the server keeps running without a console.
///
/// # Errors
///
/// Will return `Err` if reading from the console fails
pub async fn wait_for_stop<R>(reader: R) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        match ConsoleCommand::parse(&line) {
            Some(ConsoleCommand::Stop) => {
                info!("stop requested from console");
                return Ok(true);
            }
            None if line.trim().is_empty() => {}
            None => warn!(input = %line.trim(), "unknown console command, try 'stop'"),
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_stop() {
        assert_eq!(ConsoleCommand::parse("  stop\n"), Some(ConsoleCommand::Stop));
        assert_eq!(ConsoleCommand::parse("STOP"), None);
        assert_eq!(ConsoleCommand::parse("stop now"), None);
    }

    #[tokio::test]
    async fn stop_after_noise() {
        let input: &[u8] = b"hello\n\nstop\nignored\n";
        assert!(wait_for_stop(input).await.unwrap());
    }

    #[tokio::test]
    async fn eof_without_stop() {
        let input: &[u8] = b"status\n";
        assert!(!wait_for_stop(input).await.unwrap());
    }
}
