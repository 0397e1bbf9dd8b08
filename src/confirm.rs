use std::io::{self, Write};

use crate::model::Platform;

/// Operator's verdict on a set of candidate profile links.
pub enum Choice {
    /// Zero-based index into the candidate list.
    Pick(usize),
    Skip,
    /// URL typed in by hand when no candidate fits.
    Manual(String),
}

/// Human-in-the-loop confirmation seam. The enrichment loop never reads
/// stdin itself; tests drive it with a scripted implementation.
pub trait Chooser {
    fn choose(&mut self, member_name: &str, platform: Platform, candidates: &[String]) -> Choice;
}

/// Interactive terminal prompt, one round per platform.
pub struct TerminalChooser;

impl Chooser for TerminalChooser {
    fn choose(&mut self, member_name: &str, platform: Platform, candidates: &[String]) -> Choice {
        if candidates.is_empty() {
            println!("    > No potential {platform} profile links found for {member_name}.");
        } else {
            println!("    ? Potential {platform} links for {member_name}:");
            for (i, url) in candidates.iter().enumerate() {
                println!("      [{}] {}", i + 1, url);
            }
        }

        loop {
            print!("      Number to accept, (m)anual entry, or Enter/(s) to skip: ");
            io::stdout().flush().ok();
            let Some(input) = read_line() else {
                return Choice::Skip;
            };

            match input.to_lowercase().as_str() {
                "" | "s" => return Choice::Skip,
                "m" => {
                    print!("      URL: ");
                    io::stdout().flush().ok();
                    return match read_line() {
                        Some(url) if !url.is_empty() => Choice::Manual(url),
                        _ => Choice::Skip,
                    };
                }
                other => match other.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= candidates.len() => return Choice::Pick(n - 1),
                    _ => println!("      Invalid input. Enter a number, 's', or 'm'."),
                },
            }
        }
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    Some(line.trim().to_string())
}
