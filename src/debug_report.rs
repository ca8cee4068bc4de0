use deedname::{NameOrder, ParseResultVerbose, TokenSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if details.tokens.is_empty() {
        println!("{}", palette.dim("  No tokens (empty or punctuation-only input)"));
    }
    for (idx, tok) in details.tokens.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_token(tok, &palette));
    }

    println!("\n{}", palette.paint("━━━ Cascade ━━━", ansi::GRAY));
    let markers = if details.markers.is_empty() { "none".to_string() } else { details.markers.join(" | ") };
    println!("  {} {}", palette.dim("markers:"), palette.paint(markers, ansi::YELLOW));
    println!("  {} {}", palette.dim("active:"), palette.dim(details.active_rules.join(" → ")));
    println!("  {} {}", palette.dim("fired:"), palette.paint(&details.rule, ansi::BLUE));

    println!("\n{}", palette.paint("━━━ Names ━━━", ansi::GRAY));
    if details.candidates.is_empty() {
        println!("{}", palette.dim("  No name candidates"));
    } else {
        println!("  {} {}", palette.dim("candidates:"), details.candidates.join(", "));
    }
    if let Some(d) = &details.ordering {
        let order = match d.order {
            NameOrder::FirstLast => "first last",
            NameOrder::LastFirst => "last first",
        };
        println!(
            "  {} {}  {} {}  {} {}{}",
            palette.dim("order:"),
            palette.paint(order, ansi::CYAN),
            palette.dim("H1:"),
            palette.paint(d.first_last.to_string(), ansi::YELLOW),
            palette.dim("H2:"),
            palette.paint(d.last_first.to_string(), ansi::YELLOW),
            if d.pinned { palette.dim("  (pinned)") } else { String::new() },
        );
    }
    if details.borrowed_surname {
        println!("  {}", palette.dim("surname borrowed from a later party"));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    let r = &res.result;
    println!("  {} {}", palette.dim("entity_type:"), palette.bold(palette.paint(r.entity_type.as_str(), ansi::GREEN)));
    println!("  {} {}", palette.dim("first_name: "), palette.paint(&r.first_name, ansi::GREEN));
    if !r.middle_name.is_empty() {
        println!("  {} {}", palette.dim("middle_name:"), palette.paint(&r.middle_name, ansi::GREEN));
    }
    println!("  {} {}", palette.dim("last_name:  "), palette.paint(&r.last_name, ansi::GREEN));
    if let Some(confidence) = r.confidence {
        let color = if r.is_low_confidence() { ansi::YELLOW } else { ansi::GREEN };
        println!("  {} {}", palette.dim("confidence: "), palette.paint(format!("{confidence:.2}"), color));
    }
    if let Some(gender) = details.first_name_gender {
        println!("  {} {}", palette.dim("gender:     "), palette.dim(format!("{gender:?}").to_lowercase()));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Normalize: {}  │  Classify: {}  │  Extract: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.normalize), ansi::CYAN),
        palette.dim(format!("{:?}", details.classify)),
        palette.dim(format!("{:?}", details.extract)),
    );
    println!();
}

fn fmt_token(tok: &TokenSummary, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {}",
        palette.bold(&tok.text),
        palette.dim(format!("({})", tok.lower)),
        palette.paint(tok.flags.join(" "), ansi::BLUE)
    )
}
