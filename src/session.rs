use crate::error::Result;
use crate::menu::NumberedMenu;
use crate::order::{Order, OrderLine};
use std::io::{BufRead, Write};
use thiserror::Error;

/// A recoverable problem with one line of user input.
///
/// The `Display` text is the user-facing diagnostic; neither variant ends
/// the session, both lead straight back to the prompt.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number or 'done'.")]
    Parse,
    #[error("Invalid number. Please choose a number between 1 and {max}.")]
    Range { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    AwaitingInput,
    ItemAdded,
    Finished,
}

/// Outcome of feeding one input line to the session.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Added(OrderLine),
    Rejected(InputError),
    Finished,
}

/// The interactive ordering loop.
///
/// Owns the numbered menu and the order being built. `handle_line` applies
/// one state transition; `run` drives it over an input/output pair until the
/// user is done.
pub struct OrderSession {
    menu: NumberedMenu,
    order: Order,
    state: SessionState,
}

impl OrderSession {
    pub fn new(menu: NumberedMenu) -> Self {
        Self {
            menu,
            order: Order::new(),
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Applies one line of input.
    ///
    /// Surrounding whitespace is ignored and the `done` sentinel is matched
    /// case-insensitively. Anything else must parse as an integer within
    /// `1..=max_number()`; a rejected line leaves the order untouched.
    pub fn handle_line(&mut self, raw: &str) -> Reply {
        let token = raw.trim();

        if token.eq_ignore_ascii_case("done") {
            self.state = SessionState::Finished;
            return Reply::Finished;
        }

        let number = match token.parse::<i64>() {
            Ok(number) => number,
            Err(_) => {
                self.state = SessionState::AwaitingInput;
                return Reply::Rejected(InputError::Parse);
            }
        };

        let max = self.menu.max_number();
        if number < 1 || number as usize > max {
            self.state = SessionState::AwaitingInput;
            return Reply::Rejected(InputError::Range { max });
        }

        match self.menu.get(number as usize) {
            Some(item) => {
                let line = OrderLine::from(item);
                self.order.push(line.clone());
                self.state = SessionState::ItemAdded;
                Reply::Added(line)
            }
            // Unreachable once the range check passed; treat as out of range
            // rather than panicking on a bad lookup.
            None => {
                self.state = SessionState::AwaitingInput;
                Reply::Rejected(InputError::Range { max })
            }
        }
    }

    /// Blocks on `input` one line at a time until the user finishes, echoing
    /// prompts, confirmations and diagnostics to `output`.
    ///
    /// Consumes the session and hands back the completed order. End of input
    /// ends the session the same way an explicit `done` would, so piped
    /// input cannot loop forever.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, output: &mut W) -> Result<Order> {
        let mut lines = input.lines();
        loop {
            write!(
                output,
                "Enter the number of your desired item (or 'done' to finish): "
            )?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };

            match self.handle_line(&line?) {
                Reply::Finished => break,
                Reply::Added(line) => {
                    writeln!(
                        output,
                        "You've added {} (${}) to your selection.",
                        line.name, line.unit_price
                    )?;
                    writeln!(output, "---")?;
                }
                Reply::Rejected(err) => {
                    writeln!(output, "{err}")?;
                }
            }
        }
        Ok(self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, MenuItem, Price};
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn two_item_session() -> OrderSession {
        let catalog = Catalog::new(vec![Category::new(
            "Snacks",
            vec![
                MenuItem::new("Chips", Price::new(dec!(1.50)).unwrap()),
                MenuItem::new("Cookies", Price::new(dec!(2.00)).unwrap()),
            ],
        )]);
        let menu = NumberedMenu::present(&catalog, &mut Vec::<u8>::new()).unwrap();
        OrderSession::new(menu)
    }

    #[test]
    fn test_done_finishes_without_adding() {
        let mut session = two_item_session();
        assert_eq!(session.handle_line("done"), Reply::Finished);
        assert_eq!(session.state(), SessionState::Finished);
        assert!(session.order().is_empty());
    }

    #[test]
    fn test_done_is_trimmed_and_case_insensitive() {
        let mut session = two_item_session();
        assert_eq!(session.handle_line("  DoNe  "), Reply::Finished);
    }

    #[test]
    fn test_non_numeric_input_is_a_parse_rejection() {
        let mut session = two_item_session();
        assert_eq!(
            session.handle_line("abc"),
            Reply::Rejected(InputError::Parse)
        );
        assert_eq!(session.state(), SessionState::AwaitingInput);
        assert!(session.order().is_empty());
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected_with_the_bound() {
        let mut session = two_item_session();
        for input in ["0", "3", "-1", "99"] {
            assert_eq!(
                session.handle_line(input),
                Reply::Rejected(InputError::Range { max: 2 })
            );
        }
        assert!(session.order().is_empty());
    }

    #[test]
    fn test_valid_selection_appends_a_snapshot() {
        let mut session = two_item_session();
        let reply = session.handle_line(" 1 ");

        match reply {
            Reply::Added(line) => {
                assert_eq!(line.name, "Chips");
                assert_eq!(line.unit_price, Price::new(dec!(1.50)).unwrap());
            }
            other => panic!("expected Added, got {other:?}"),
        }
        assert_eq!(session.state(), SessionState::ItemAdded);
        assert_eq!(session.order().lines().len(), 1);
    }

    #[test]
    fn test_rejection_after_add_returns_to_awaiting_input() {
        let mut session = two_item_session();
        session.handle_line("1");
        assert_eq!(session.state(), SessionState::ItemAdded);
        session.handle_line("abc");
        assert_eq!(session.state(), SessionState::AwaitingInput);
    }

    #[test]
    fn test_empty_menu_only_accepts_done() {
        let menu = NumberedMenu::present(&Catalog::default(), &mut Vec::<u8>::new()).unwrap();
        let mut session = OrderSession::new(menu);

        assert_eq!(
            session.handle_line("1"),
            Reply::Rejected(InputError::Range { max: 0 })
        );
        assert_eq!(session.handle_line("done"), Reply::Finished);
    }

    #[test]
    fn test_run_scripted_conversation() {
        let session = two_item_session();
        let input = Cursor::new("1\nabc\n0\n2\ndone\n");
        let mut output = Vec::new();

        let order = session.run(input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.total().to_string(), "3.50");
        assert!(text.contains("You've added Chips ($1.50) to your selection."));
        assert!(text.contains("Invalid input. Please enter a number or 'done'."));
        assert!(text.contains("Invalid number. Please choose a number between 1 and 2."));
        assert!(text.contains("You've added Cookies ($2.00) to your selection."));
    }

    #[test]
    fn test_run_treats_end_of_input_as_done() {
        let session = two_item_session();
        let input = Cursor::new("1\n");
        let mut output = Vec::new();

        let order = session.run(input, &mut output).unwrap();
        assert_eq!(order.lines().len(), 1);
    }
}
