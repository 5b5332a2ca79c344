//! Console implementations of the choice collector and event sink.

use std::io;

use dicelock_core::{
    Choice, ChoiceCollector, ChoiceRequest, DrawPurpose, EventSink, GameEvent, Outcome, Player,
    PromptKind,
};

/// Reads choices from stdin, looping on malformed input
pub struct ConsoleCollector;

impl ConsoleCollector {
    pub fn new() -> Self {
        Self
    }

    fn present_menu(request: &ChoiceRequest) {
        match request.prompt {
            PromptKind::FirstMoveGuess | PromptKind::DiceSelection => {
                if request.prompt == PromptKind::DiceSelection {
                    println!("Choose your dice:");
                }
                for option in &request.options {
                    println!("{} - {}", option.value, option.label);
                }
                println!("X - exit");
                println!("? - help");
            }
            PromptKind::ModuloContribution => {}
        }
    }
}

impl ChoiceCollector for ConsoleCollector {
    fn collect(&mut self, request: &ChoiceRequest) -> Choice {
        Self::present_menu(request);
        let (min, max) = request.bounds();
        loop {
            let mut line = String::new();
            if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
                // Closed stdin counts as an exit.
                return Choice::Exit;
            }
            let input = line.trim().to_uppercase();
            if input == "X" {
                return Choice::Exit;
            }
            if input == "?" {
                println!("Help is not yet implemented.");
                continue;
            }
            if let Ok(value) = input.parse::<i32>() {
                if request.offers(value) {
                    return Choice::Selected(value);
                }
            }
            println!(
                "Invalid selection. Enter a number between {min} and {max}, X to exit, or ? for help."
            );
        }
    }
}

/// Renders game events as the console dialogue
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ConsolePresenter {
    fn publish(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CommitmentPublished {
                purpose,
                min,
                max,
                digest,
            } => {
                match purpose {
                    DrawPurpose::FirstMove => {
                        println!("Let's determine who makes the first move.");
                    }
                    DrawPurpose::OpponentThrow => {
                        println!("It's time for my throw.");
                    }
                    DrawPurpose::HumanThrow => {
                        println!("It's time for your throw.");
                    }
                }
                println!("I selected a random value in the range {min}..{max} (HMAC={digest}).");
                match purpose {
                    DrawPurpose::FirstMove => println!("Try to guess my selection."),
                    DrawPurpose::OpponentThrow | DrawPurpose::HumanThrow => {
                        println!("Add your number modulo 6.");
                    }
                }
            }
            GameEvent::CommitmentRevealed {
                purpose,
                value,
                key,
            } => match purpose {
                DrawPurpose::FirstMove => println!("My selection: {value} (KEY={key})."),
                DrawPurpose::OpponentThrow | DrawPurpose::HumanThrow => {
                    println!("My number is {value} (KEY={key}).");
                }
            },
            GameEvent::FirstMoveDecided { human_first, .. } => {
                if *human_first {
                    println!("You guessed right, you make the first move.");
                } else {
                    println!("I make the first move and choose the dice.");
                }
            }
            GameEvent::DiceAssigned { player, die, .. } => match player {
                Player::Human => println!("You chose the [{die}] dice."),
                Player::Opponent => println!("I choose the [{die}] dice."),
            },
            GameEvent::ModuloExchanged {
                machine_share,
                human_share,
                combined,
                ..
            } => {
                println!(
                    "The result is {machine_share} + {human_share} = {combined} (mod 6)."
                );
            }
            GameEvent::ThrowResolved { player, face, .. } => match player {
                Player::Human => println!("Your throw is {face}."),
                Player::Opponent => println!("My throw is {face}."),
            },
            GameEvent::GameResolved {
                human_face,
                opponent_face,
                outcome,
            } => match outcome {
                Outcome::HumanWins => println!("You win ({human_face} > {opponent_face})!"),
                Outcome::OpponentWins => println!("I win ({opponent_face} > {human_face})!"),
                Outcome::Tie => println!("It's a tie ({human_face} == {opponent_face})!"),
            },
        }
    }
}
