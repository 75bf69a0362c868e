//! Colorful console output for index loading and tree parsing.
//!
//! Provides a `tracing` layer that formats natlog events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Fact load lifecycle (start, progress, end)
//! - **WARN**: Data-quality problems in trees, facts and sense tables
//! - **DEBUG**: Per-tree parse summaries

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` refines the filter; fact loading always reports at INFO.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();
        if let Ok(directive) = "natlog_facts=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(NatlogConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "natlog".bright_cyan().bold(),
        format!("v{VERSION} - natural-logic inference core").bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats natlog events with colors.
pub struct NatlogConsoleLayer;

impl<S: Subscriber> Layer<S> for NatlogConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("natlog") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    read: Option<u64>,
    indexed: Option<u64>,
    facts: Option<u64>,
    sense_variants: Option<u64>,
    sense_words: Option<u64>,
    skipped_low_weight: Option<u64>,
    skipped_malformed: Option<u64>,
    min_fact_weight: Option<u64>,
    memory_mb: Option<u64>,
    tokens: Option<u64>,
    quantifiers: Option<u64>,
    line: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "read" => self.read = Some(value),
            "indexed" => self.indexed = Some(value),
            "facts" => self.facts = Some(value),
            "sense_variants" => self.sense_variants = Some(value),
            "sense_words" => self.sense_words = Some(value),
            "skipped_low_weight" => self.skipped_low_weight = Some(value),
            "skipped_malformed" => self.skipped_malformed = Some(value),
            "min_fact_weight" => self.min_fact_weight = Some(value),
            "memory_mb" => self.memory_mb = Some(value),
            "tokens" => self.tokens = Some(value),
            "quantifiers" => self.quantifiers = Some(value),
            "line" => self.line = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "fact_load_start" => format_load_start(v),
        "fact_load_progress" => format_load_progress(v),
        "fact_load_end" => format_load_end(v),
        "tree_parsed" => format_tree_parsed(v),
        _ if level == Level::WARN || level == Level::ERROR => format_warning(v, level),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_load_start(v: &EventVisitor) -> String {
    format!(
        "{} Loading facts │ {} sense words │ min weight {}",
        "▶".bright_green().bold(),
        count(v.sense_words).bright_yellow(),
        count(v.min_fact_weight).bright_yellow()
    )
}

fn format_load_progress(v: &EventVisitor) -> String {
    format!(
        "{} {:>12} facts │ {} MB",
        "⚡".bright_cyan(),
        count(v.facts).white(),
        count(v.memory_mb).bright_magenta()
    )
}

fn format_load_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Facts loaded │ {} read │ {} indexed │ {} sense variants │ {} MB",
        "■".bright_cyan().bold(),
        count(v.read).white(),
        count(v.indexed).bright_green(),
        count(v.sense_variants).white(),
        count(v.memory_mb).bright_magenta().bold()
    );

    let skipped = v.skipped_low_weight.unwrap_or(0) + v.skipped_malformed.unwrap_or(0);
    if skipped > 0 {
        output.push_str(&format!(
            " │ {} skipped ({} light, {} malformed)",
            skipped.to_formatted_string(&Locale::en).bright_yellow(),
            count(v.skipped_low_weight),
            count(v.skipped_malformed)
        ));
    }

    output
}

fn format_tree_parsed(v: &EventVisitor) -> String {
    format!(
        "    {} tree │ {} tokens │ {} quantifiers",
        "->".bright_blue(),
        count(v.tokens).white(),
        count(v.quantifiers).white()
    )
}

fn format_warning(v: &EventVisitor, level: Level) -> String {
    let label = if level == Level::ERROR {
        "ERROR".bright_red().bold().to_string()
    } else {
        "WARN".yellow().bold().to_string()
    };
    let mut output = format!(
        "{} {}",
        label,
        v.event.as_deref().unwrap_or("natlog").white().bold()
    );
    if let Some(line) = v.line {
        output.push_str(&format!(" (line {})", line));
    }
    if let Some(message) = &v.message {
        output.push_str(&format!(": {}", message));
    }
    output
}
