//! Interactive session: reads command lines, runs them, writes results.

use std::io::{BufRead, Write};

use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};
use crate::network::Network;
use crate::registry::NetworkRegistry;

/// Shown instead of an empty listing.
pub const EMPTY_REPORT: &str = "EMPTY";

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    registry: NetworkRegistry,
    config: SessionConfig,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            registry: NetworkRegistry::new(),
            config,
            running: true,
        }
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Parse and run one line. `Ok(None)` means the command prints nothing.
    pub fn handle_line(&mut self, line: &str) -> AppResult<Option<String>> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Run a parsed command against the registry.
    pub fn execute(&mut self, command: Command) -> AppResult<Option<String>> {
        match command {
            Command::Add { network, sections } => {
                if let Some(existing) = self.registry.get_mut(&network) {
                    let [section] = <[_; 1]>::try_from(sections).map_err(|_| {
                        AppError::InvalidFormat(
                            "exactly one section can be added to an existing network".to_string(),
                        )
                    })?;
                    existing.add_section(&section)?;
                    return Ok(Some(format!(
                        "Added new section {} to escape network {}.",
                        section, network
                    )));
                }

                let created = Network::create(network.clone(), sections)?;
                self.registry.insert(created)?;
                Ok(Some(format!(
                    "Added new escape network with identifier {}.",
                    network
                )))
            }
            Command::Print { network } => {
                let network = self
                    .registry
                    .get(&network)
                    .ok_or(AppError::NetworkNotFound(network))?;
                Ok(Some(join_lines(network.sections())))
            }
            Command::List { network: None } => {
                Ok(Some(join_lines(self.registry.summaries().into_iter().map(
                    |s| format!("{} {}", s.id, s.node_count),
                ))))
            }
            Command::List {
                network: Some(network),
            } => {
                let network = self
                    .registry
                    .get(&network)
                    .ok_or(AppError::NetworkNotFound(network))?;
                Ok(Some(join_lines(network.cached_flows())))
            }
            Command::Flow {
                network,
                start,
                end,
            } => {
                let network = self.registry.require_mut(&network)?;
                let flow = network.max_flow(&start, &end)?;
                Ok(Some(flow.to_string()))
            }
            Command::Quit => {
                self.running = false;
                Ok(None)
            }
        }
    }

    /// Read lines until `quit` or end of input.
    ///
    /// Command errors are written as lines with the configured prefix and do
    /// not stop the session; only I/O failures do.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> AppResult<()> {
        let mut lines = input.lines();
        while self.running {
            if let Some(prompt) = &self.config.prompt {
                write!(output, "{}", prompt)?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if self.config.echo_commands {
                writeln!(output, "{}", line)?;
            }

            match self.handle_line(&line) {
                Ok(Some(text)) => writeln!(output, "{}", text)?,
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(%line, error = %err, "command rejected");
                    writeln!(output, "{}{}", self.config.error_prefix, err)?;
                }
            }
        }
        output.flush()?;
        Ok(())
    }
}

fn join_lines<T: ToString>(rows: impl IntoIterator<Item = T>) -> String {
    let rows: Vec<String> = rows.into_iter().map(|r| r.to_string()).collect();
    if rows.is_empty() {
        EMPTY_REPORT.to_string()
    } else {
        rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> String {
        session.handle_line(line).unwrap().unwrap_or_default()
    }

    #[test]
    fn add_then_extend() {
        let mut session = Session::default();
        assert_eq!(
            run(&mut session, "add HQ a3b;b2c"),
            "Added new escape network with identifier HQ."
        );
        assert_eq!(
            run(&mut session, "add HQ c04d"),
            "Added new section c4d to escape network HQ."
        );
        assert_eq!(run(&mut session, "print HQ"), "a3b\nb2c\nc4d");
    }

    #[test]
    fn extend_requires_single_section() {
        let mut session = Session::default();
        run(&mut session, "add HQ a3b;b2c");
        assert!(matches!(
            session.handle_line("add HQ c1d;d1e"),
            Err(AppError::InvalidFormat(_))
        ));
    }

    #[test]
    fn listings_start_empty() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "list"), EMPTY_REPORT);
        run(&mut session, "add HQ a3b;b2c");
        assert_eq!(run(&mut session, "list HQ"), EMPTY_REPORT);
        assert_eq!(run(&mut session, "list"), "HQ 3");
    }

    #[test]
    fn flow_is_listed_until_change() {
        let mut session = Session::default();
        run(&mut session, "add HQ a3b;b2c");
        assert_eq!(run(&mut session, "flow HQ a c"), "2");
        assert_eq!(run(&mut session, "list HQ"), "2 a c");
        run(&mut session, "add HQ b5c");
        assert_eq!(run(&mut session, "list HQ"), EMPTY_REPORT);
        assert_eq!(run(&mut session, "flow HQ a c"), "3");
    }

    #[test]
    fn unknown_network() {
        let mut session = Session::default();
        for line in ["print NO", "list NO", "flow NO a b"] {
            assert!(matches!(
                session.handle_line(line),
                Err(AppError::NetworkNotFound(_))
            ));
        }
    }

    #[test]
    fn quit_stops_session() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("quit").unwrap(), None);
        assert!(!session.is_running());
    }
}
