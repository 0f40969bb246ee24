use crate::car_wash::CarWash;
use crate::io::{CarWashIo, Tone};
use anyhow::Result;
use log::{debug, info};
use std::num::NonZeroUsize;
use std::str::FromStr;

const MENU: &str = "\nMenu:\n\
                    1. Car arrives\n\
                    2. Wash next car (pop)\n\
                    3. Show current line\n\
                    4. Exit";

pub const BANNER: &str = "=== CAR WASH SIMULATION (STACK) ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Arrive,
    Wash,
    Show,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice;

impl FromStr for Choice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = match s.trim() {
            "1" => Choice::Arrive,
            "2" => Choice::Wash,
            "3" => Choice::Show,
            "4" => Choice::Exit,
            _ => return Err(InvalidChoice),
        };
        Ok(choice)
    }
}

/// Keep asking until the user gives a positive whole number.
///
/// Returns `None` if input runs out first.
pub fn prompt_capacity(io: &mut dyn CarWashIo) -> Result<Option<NonZeroUsize>> {
    loop {
        let Some(line) = io.read_line("Enter maximum number of cars in car wash line: ")? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(capacity) => return Ok(Some(capacity)),
            Err(_) => io.show(Tone::Warning, "Please enter a positive whole number.")?,
        }
    }
}

/// Run the menu loop until the user exits or input runs out.
pub fn run(wash: &mut CarWash, io: &mut dyn CarWashIo) -> Result<()> {
    info!("session started, capacity {}", wash.capacity());

    loop {
        io.show(Tone::Plain, MENU)?;
        let Some(input) = io.read_line("Enter your choice: ")? else {
            break;
        };

        let choice = match input.parse::<Choice>() {
            Ok(choice) => choice,
            Err(InvalidChoice) => {
                debug!("invalid choice {input:?}");
                io.show(Tone::Warning, "Invalid choice. Please try again.")?;
                continue;
            }
        };
        debug!("choice: {choice:?}");

        match choice {
            Choice::Arrive => {
                let Some(id) = io.read_line("Enter car number/ID: ")? else {
                    break;
                };
                match wash.arrive(id.as_str()) {
                    Ok(()) => {
                        let msg = format!("Car {id} has entered the car wash line.");
                        io.show(Tone::Success, &msg)?;
                    }
                    Err(e) => io.show(Tone::Warning, &e.to_string())?,
                }
            }
            Choice::Wash => match wash.wash_car() {
                Ok(id) => {
                    let msg = format!("Car {id} is being washed and leaving the car wash.");
                    io.show(Tone::Success, &msg)?;
                }
                Err(e) => io.show(Tone::Warning, &e.to_string())?,
            },
            Choice::Show => io.show(Tone::Plain, &wash.show_line().to_string())?,
            Choice::Exit => {
                io.show(Tone::Plain, "Exiting simulation. Goodbye!")?;
                break;
            }
        }
    }

    info!("session ended with {} car(s) in line", wash.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car_wash::CarId;
    use std::collections::VecDeque;

    /// Feeds canned input lines and records everything shown.
    #[derive(Debug, Default)]
    struct ScriptedIo {
        input: VecDeque<String>,
        shown: Vec<(Tone, String)>,
    }

    impl ScriptedIo {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|s| s.to_string()).collect(),
                shown: vec![],
            }
        }

        /// Everything shown except the menu itself.
        fn messages(&self) -> Vec<&str> {
            self.shown
                .iter()
                .map(|(_, text)| text.as_str())
                .filter(|&text| text != MENU)
                .collect()
        }
    }

    impl CarWashIo for ScriptedIo {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
            Ok(self.input.pop_front())
        }

        fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
            self.shown.push((tone, text.to_owned()));
            Ok(())
        }
    }

    #[test]
    fn parse_choice() {
        assert_eq!("1".parse::<Choice>(), Ok(Choice::Arrive));
        assert_eq!(" 2 ".parse::<Choice>(), Ok(Choice::Wash));
        assert_eq!("3".parse::<Choice>(), Ok(Choice::Show));
        assert_eq!("4\r".parse::<Choice>(), Ok(Choice::Exit));
        assert_eq!("5".parse::<Choice>(), Err(InvalidChoice));
        assert_eq!("".parse::<Choice>(), Err(InvalidChoice));
        assert_eq!("one".parse::<Choice>(), Err(InvalidChoice));
    }

    #[test]
    fn full_session() {
        let mut wash = CarWash::new(2);
        let mut io = ScriptedIo::new(&[
            "1", "A", "1", "B", "1", "C", "3", "2", "1", "C", "2", "2", "2", "9", "4",
        ]);
        run(&mut wash, &mut io).unwrap();

        assert_eq!(
            io.messages(),
            [
                "Car A has entered the car wash line.",
                "Car B has entered the car wash line.",
                "Car C cannot enter. Car wash line is FULL!",
                "Current car wash line (bottom --> top):\nA | B",
                "Car B is being washed and leaving the car wash.",
                "Car C has entered the car wash line.",
                "Car C is being washed and leaving the car wash.",
                "Car A is being washed and leaving the car wash.",
                "No cars to wash. Line is EMPTY!",
                "Invalid choice. Please try again.",
                "Exiting simulation. Goodbye!",
            ]
        );
        assert!(wash.is_empty());
    }

    #[test]
    fn rejections_are_warnings() {
        let mut wash = CarWash::new(1);
        let mut io = ScriptedIo::new(&["2", "1", "A", "1", "B", "4"]);
        run(&mut wash, &mut io).unwrap();

        let tones: Vec<_> = io
            .shown
            .iter()
            .filter(|(_, text)| text != MENU)
            .map(|&(tone, _)| tone)
            .collect();
        assert_eq!(
            tones,
            [Tone::Warning, Tone::Success, Tone::Warning, Tone::Plain]
        );
        assert_eq!(wash.show_line().cars(), [CarId::from("A")]);
    }

    #[test]
    fn ids_are_admitted_as_typed() {
        let mut wash = CarWash::new(3);
        let mut io = ScriptedIo::new(&["1", " 42 ", "1", "", "1", "42", "4"]);
        run(&mut wash, &mut io).unwrap();

        assert_eq!(
            io.messages(),
            [
                "Car  42  has entered the car wash line.",
                "Car  has entered the car wash line.",
                "Car 42 has entered the car wash line.",
                "Exiting simulation. Goodbye!",
            ]
        );
        assert_eq!(
            wash.show_line().cars(),
            [CarId::from(" 42 "), CarId::from(""), CarId::from("42")]
        );
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut wash = CarWash::new(2);
        let mut io = ScriptedIo::new(&["1", "A", "1"]);
        run(&mut wash, &mut io).unwrap();

        assert_eq!(io.messages(), ["Car A has entered the car wash line."]);
        assert_eq!(wash.len(), 1);
    }

    #[test]
    fn capacity_prompt_retries_until_valid() {
        let mut io = ScriptedIo::new(&["zero", "0", "-3", " 3 "]);
        let capacity = prompt_capacity(&mut io).unwrap();

        assert_eq!(capacity, NonZeroUsize::new(3));
        assert_eq!(io.messages(), ["Please enter a positive whole number."; 3]);
    }

    #[test]
    fn capacity_prompt_gives_up_at_end_of_input() {
        let mut io = ScriptedIo::new(&["nope"]);
        assert_eq!(prompt_capacity(&mut io).unwrap(), None);
    }
}
