//! Interactive terminal shell around the chat engine.
//!
//! Each submission is handled to completion before the next line is read;
//! the only escape from an in-flight call is the client's own timeout.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use basa_ai::{ChatEngine, ChatTurn, Role, TurnOutcome};

const INPUT_HINT: &str = "Tanyakan sesuatu tentang basa Jawa...";

pub async fn run(mut engine: ChatEngine) -> ExitCode {
    println!("basa — asisten bahasa Jawa (Gemini)");
    println!("Ketik pesan ({INPUT_HINT}), /reset untuk topik baru, /quit untuk keluar.");
    println!();
    for turn in engine.turns() {
        print_turn(turn);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::error!("stdin read failed: {e}");
                return ExitCode::FAILURE;
            }
            None => break, // EOF
        };

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                engine.reset();
                println!("Topik baru dimulai.");
                for turn in engine.turns() {
                    print_turn(turn);
                }
            }
            text => {
                println!("Sedang memproses...");
                match engine.submit(text).await {
                    TurnOutcome::Replied => print_reply(&engine),
                    TurnOutcome::Degraded { warning } => {
                        print_reply(&engine);
                        eprintln!("Peringatan: {warning}");
                    }
                    TurnOutcome::Fatal { error } => {
                        eprintln!("Kesalahan konfigurasi: {error}");
                        return ExitCode::FAILURE;
                    }
                    TurnOutcome::Ignored => {}
                }
            }
        }
    }

    println!("Sampai jumpa.");
    ExitCode::SUCCESS
}

fn prompt() {
    print!("anda> ");
    let _ = io::stdout().flush();
}

/// Print the model turn that the submission just appended.
fn print_reply(engine: &ChatEngine) {
    if let Some(turn) = engine.transcript().all().last() {
        print_turn(turn);
    }
}

fn print_turn(turn: &ChatTurn) {
    match turn.role {
        Role::User => println!("anda> {}", turn.text),
        Role::Model => println!("basa> {}", turn.text),
    }
}
