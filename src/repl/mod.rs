//! Interactive REPL for Buddy
//!
//! Plays the role of the original point-and-click surface:
//! - persona creation wizard with preset menus and per-field validation
//! - chat loop with command history
//! - slash commands for persona management
//!
//! The REPL owns the session across turns; the core has no durability of
//! its own. Input is read one line at a time, so a new turn can't be
//! submitted while the previous one is still resolving.

pub mod colors;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::persona::{PERSONALITY_PRESETS, PersonaConfig, SPECIALTY_PRESETS};
use crate::session::TurnSession;
use crate::turn::TurnExecutor;

use colors::ansi::*;

/// REPL state
pub struct Repl {
    /// Readline editor with history
    editor: DefaultEditor,
    /// Turn pipeline bound to the completion provider
    executor: TurnExecutor,
    /// History file path
    history_path: std::path::PathBuf,
}

impl Repl {
    pub fn new(executor: TurnExecutor) -> Result<Self> {
        let editor = DefaultEditor::new()?;

        // History file in ~/.buddy/chat_history
        let history_path = dirs::home_dir()
            .unwrap_or_default()
            .join(".buddy")
            .join("chat_history");

        Ok(Self {
            editor,
            executor,
            history_path,
        })
    }

    /// Load command history
    fn load_history(&mut self) {
        if self.history_path.exists() {
            let _ = self.editor.load_history(&self.history_path);
        }
    }

    /// Save command history
    fn save_history(&mut self) {
        if let Some(parent) = self.history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = self.editor.save_history(&self.history_path);
    }

    /// Run the wizard, then the chat loop
    pub async fn run(&mut self) -> Result<()> {
        self.load_history();

        let Some(persona) = self.create_persona()? else {
            println!("Goodbye!");
            return Ok(());
        };
        let mut session = TurnSession::new(persona);

        println!();
        print_bot_message(&session);
        println!();
        println!(
            "{}",
            colors::status("Type your message (Ctrl+D to exit, /help for commands)")
        );
        println!();

        loop {
            let readline = self.editor.readline(">>> ");

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    self.editor.add_history_entry(&line)?;

                    // Handle slash commands
                    if trimmed.starts_with('/') {
                        if !self.handle_command(trimmed, &mut session)? {
                            break;
                        }
                        continue;
                    }

                    // One turn: user message in, reply (or in-band error) out
                    println!(
                        "{}",
                        colors::status(&format!(
                            "🤔 {} is thinking...",
                            session.persona().bot_name
                        ))
                    );
                    self.executor.advance_turn(&mut session, trimmed).await;
                    print_bot_message(&session);
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    /// Handle slash commands. Returns false when the loop should exit.
    fn handle_command(&mut self, cmd: &str, session: &mut TurnSession) -> Result<bool> {
        match cmd {
            "/help" => {
                println!("Commands:");
                println!("  /help     - Show this help");
                println!("  /bot      - Show your AI friend's details");
                println!("  /edit     - Redesign your AI friend from scratch");
                println!("  /clear    - Clear the chat and start fresh");
                println!("  /quit     - Exit");
                println!();
                println!("Chat tips: ask questions, request stories or jokes,");
                println!("get help with homework, or just share your thoughts!");
            }
            "/bot" => {
                print_persona_card(session.persona());
            }
            "/edit" => {
                if let Some(persona) = self.create_persona()? {
                    session.replace_persona(persona);
                    println!();
                    print_bot_message(session);
                } else {
                    println!("{}", colors::warning("Keeping your current AI friend."));
                }
            }
            "/clear" => {
                session.clear_chat();
                println!("{}", colors::success("Chat cleared!"));
                println!();
                print_bot_message(session);
            }
            "/quit" => {
                println!("Goodbye!");
                return Ok(false);
            }
            _ => {
                println!("Unknown command: {} (try /help)", cmd);
            }
        }
        Ok(true)
    }

    /// Persona creation wizard. Every field is required; empty input
    /// re-prompts rather than reaching the core. Returns None if the user
    /// bails out with Ctrl+C / Ctrl+D.
    fn create_persona(&mut self) -> Result<Option<PersonaConfig>> {
        loop {
            println!();
            println!("{}{}🎨 Design Your AI Friend{}", BOLD, MAGENTA, RESET);
            println!("{}", colors::separator(50));

            let Some(creator_name) =
                self.prompt_required("Your name: ", "Don't forget to enter YOUR name!")?
            else {
                return Ok(None);
            };

            let Some(bot_name) = self.prompt_required(
                "Your bot's name (e.g., Sparky, Luna, CodeBot): ",
                "Your bot needs a name!",
            )?
            else {
                return Ok(None);
            };

            let Some(personality) = self.prompt_choice(
                "My bot is ___________",
                PERSONALITY_PRESETS,
                "Choose or write a personality for your bot!",
            )?
            else {
                return Ok(None);
            };

            let Some(specialty) = self.prompt_choice(
                "My bot is especially good at ___________",
                SPECIALTY_PRESETS,
                "What should your bot be good at?",
            )?
            else {
                return Ok(None);
            };

            let persona = PersonaConfig::new(bot_name, creator_name, personality, specialty);
            debug_assert!(persona.is_complete());

            print_persona_card(&persona);

            match self.editor.readline("🚀 Create this AI friend? [Y/n] ") {
                Ok(answer) => {
                    let answer = answer.trim().to_lowercase();
                    if answer.is_empty() || answer == "y" || answer == "yes" {
                        return Ok(Some(persona));
                    }
                    // Anything else restarts the wizard
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Read one required field, re-prompting until it is non-empty.
    fn prompt_required(&mut self, prompt: &str, error_msg: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        println!("{}", colors::error(&format!("🔴 {}", error_msg)));
                        continue;
                    }
                    return Ok(Some(trimmed.to_string()));
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Offer a preset menu plus a write-your-own escape hatch. A number
    /// picks a preset; free text is taken verbatim.
    fn prompt_choice(
        &mut self,
        title: &str,
        presets: &[&str],
        error_msg: &str,
    ) -> Result<Option<String>> {
        println!();
        println!("{}{}{}", BOLD, title, RESET);
        for (i, preset) in presets.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, preset);
        }
        println!("{}", colors::status("Pick a number or write your own:"));

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        println!("{}", colors::error(&format!("🔴 {}", error_msg)));
                        continue;
                    }
                    if let Ok(n) = trimmed.parse::<usize>() {
                        if (1..=presets.len()).contains(&n) {
                            return Ok(Some(presets[n - 1].to_string()));
                        }
                        println!(
                            "{}",
                            colors::error(&format!("🔴 Pick a number from 1 to {}", presets.len()))
                        );
                        continue;
                    }
                    return Ok(Some(trimmed.to_string()));
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Print the persona preview card
fn print_persona_card(persona: &PersonaConfig) {
    println!();
    println!("{}", colors::separator(50));
    println!("{}", colors::bot_label(&persona.bot_name));
    println!(
        "{}Created by{}  {}",
        DIM, RESET, persona.creator_name
    );
    println!("{}Personality{} {}", DIM, RESET, persona.personality);
    println!("{}Specialty{}   {}", DIM, RESET, persona.specialty);
    println!("{}", colors::separator(50));
}

/// Print the last message in the transcript as the bot speaking
fn print_bot_message(session: &TurnSession) {
    if let Some(msg) = session.transcript().last() {
        println!(
            "{} {}",
            colors::bot_label(&session.persona().bot_name),
            msg.content
        );
    }
}
