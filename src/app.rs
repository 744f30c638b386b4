use std::io::{self, IsTerminal};
use std::time::Duration;

use tracing::debug;

use crate::cli::{Cli, Commands, NavArgs, NowArgs, RegexArgs, ThemeAction, TimestampArgs};
use crate::clipboard::{SystemClipboard, copy_value};
use crate::error::AppError;
use crate::nav::{HOME_ROUTE, Sidebar, canonical_route};
use crate::output::{
    RegexView, output_conversion_json, output_current_time_json, output_presets_json,
    output_regex_json, output_sidebar_json, output_theme_json, output_tools_json,
    print_conversion, print_presets_table, print_regex_result, print_theme, print_tools_table,
    render_current_time, render_sidebar,
};
use crate::pattern::{COMMON_PATTERNS, DEFAULT_FLAGS, SAMPLE_TEXT, evaluate, find_pattern, toggle_flag};
use crate::registry::TOOLS;
use crate::theme::{EnvAppearance, FileStore, ThemeController};
use crate::timestamp::{
    CurrentTime, FieldState, RefreshTimer, SystemClock, TimestampState, is_epoch_text,
};
use crate::utils::Timezone;

fn print_json(json: &str) {
    println!("{json}");
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) timezone: Timezone,
    pub(crate) use_color: bool,
}

/// Dispatch the parsed command line
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let ctx = CommandContext {
        cli,
        timezone: Timezone::parse(cli.timezone.as_deref())?,
        use_color: cli.use_color(),
    };
    debug!(timezone = %ctx.timezone.name(), use_color = ctx.use_color, "command context");

    match &cli.command {
        None | Some(Commands::Tools) => handle_tools(&ctx),
        Some(Commands::Nav(args)) => handle_nav(args, &ctx),
        Some(Commands::Regex(args)) => handle_regex(args, &ctx),
        Some(Commands::Timestamp(args)) => handle_timestamp(args, &ctx),
        Some(Commands::Now(args)) => handle_now(args, &ctx),
        Some(Commands::Theme { action }) => {
            handle_theme(action.unwrap_or(ThemeAction::Show), &ctx)
        }
    }
}

fn handle_tools(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        print_json(&output_tools_json(&TOOLS));
    } else {
        print_tools_table(&TOOLS, ctx.use_color);
    }
    Ok(())
}

fn load_theme() -> Result<ThemeController<FileStore>, AppError> {
    let store = FileStore::open_default()?;
    debug!(path = %store.path().display(), "preference store");
    Ok(ThemeController::load(store, &EnvAppearance)?)
}

fn handle_nav(args: &NavArgs, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(route) = canonical_route(&args.route) else {
        let raw = args.route.trim();
        let slug = raw.rsplit('/').find(|s| !s.is_empty()).unwrap_or(raw);
        return Err(AppError::UnknownTool {
            slug: slug.to_string(),
        });
    };

    let mut sidebar = Sidebar::new(HOME_ROUTE, load_theme()?);
    sidebar.navigate(&route);
    if args.collapsed {
        sidebar.toggle_collapsed();
    }
    if args.mobile_open {
        sidebar.open_mobile();
    }
    if args.toggle_theme {
        sidebar.toggle_theme(&EnvAppearance)?;
    }

    if ctx.cli.json {
        print_json(&output_sidebar_json(&sidebar));
    } else {
        println!("{}", render_sidebar(&sidebar, ctx.use_color));
    }
    Ok(())
}

/// `--text`, then `--file`, then piped stdin, then the sample text
fn regex_input(args: &RegexArgs) -> Result<String, AppError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: path.clone(),
            source,
        });
    }
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let text = io::read_to_string(stdin).map_err(|source| AppError::ReadInput {
            path: "-".into(),
            source,
        })?;
        if !text.is_empty() {
            return Ok(text);
        }
    }
    Ok(SAMPLE_TEXT.to_string())
}

fn handle_regex(args: &RegexArgs, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if args.list_presets {
        if ctx.cli.json {
            print_json(&output_presets_json(&COMMON_PATTERNS));
        } else {
            print_presets_table(&COMMON_PATTERNS, ctx.use_color);
        }
        return Ok(());
    }

    let pattern = match &args.preset {
        Some(name) => find_pattern(name)
            .ok_or_else(|| AppError::UnknownPattern { name: name.clone() })?
            .pattern
            .to_string(),
        None => args.pattern.clone().unwrap_or_default(),
    };
    let mut flags = args.flags.clone().unwrap_or_else(|| DEFAULT_FLAGS.to_string());
    for &flag in &args.toggle {
        flags = toggle_flag(&flags, flag);
    }
    let text = regex_input(args)?;

    let evaluation = evaluate(&pattern, &flags, &text);
    let view = RegexView {
        pattern: &pattern,
        flags: &flags,
        text: &text,
        evaluation: &evaluation,
    };
    if ctx.cli.json {
        print_json(&output_regex_json(&view));
    } else {
        print_regex_result(&view, ctx.use_color);
    }
    Ok(())
}

fn handle_timestamp(args: &TimestampArgs, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let clock = SystemClock;
    let mut state = TimestampState::new(ctx.timezone, false);

    match (&args.value, args.preset) {
        _ if args.now => state.set_now(&clock),
        (_, Some(preset)) => {
            debug!(preset = preset.label(), "applying preset");
            state.apply_preset(&clock, preset);
        }
        (Some(value), None) if is_epoch_text(value) => state.set_epoch_text(value),
        (Some(value), None) => state.set_date_text(value),
        (None, None) => state.set_now(&clock),
    }
    // Switching to UTC re-renders the date field, typed dates included
    if args.utc {
        state.set_utc(true);
    }

    if ctx.cli.json {
        print_json(&output_conversion_json(&state, args.details));
    } else {
        print_conversion(&state, args.details, ctx.use_color);
    }

    if args.copy {
        copy_converted(&state, args.value.as_deref())?;
    }
    Ok(())
}

/// Copy the field derived from the input; nothing is copied for invalid input
fn copy_converted(state: &TimestampState, input: Option<&str>) -> Result<(), AppError> {
    let date_input = input.is_some_and(|value| !is_epoch_text(value));
    let (value, valid) = if date_input {
        (state.epoch_text(), state.date_state() == FieldState::Valid)
    } else {
        (state.date_text(), state.epoch_state() == FieldState::Valid)
    };
    if !valid {
        eprintln!("Nothing to copy: input is not a valid timestamp");
        return Ok(());
    }
    copy_value(&mut SystemClipboard::new(), value)
}

fn handle_now(args: &NowArgs, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let clock = SystemClock;
    let show = |now: &CurrentTime| {
        if ctx.cli.json {
            print_json(&output_current_time_json(now));
        } else {
            println!("{}", render_current_time(now, ctx.use_color));
        }
    };

    let mut now = CurrentTime::read(&clock, ctx.timezone);
    show(&now);

    if args.watch {
        let timer = RefreshTimer::start(Duration::from_secs(1));
        let mut printed: u64 = 1;
        while args.count.is_none_or(|count| printed < count) && timer.wait() {
            now = CurrentTime::read(&clock, ctx.timezone);
            show(&now);
            printed += 1;
        }
    }

    // Last, since holding the selection may block until another client takes it
    if args.copy {
        copy_value(&mut SystemClipboard::new(), &now.unix.to_string())?;
    }
    Ok(())
}

fn handle_theme(action: ThemeAction, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut theme = load_theme()?;
    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            let preference = theme.toggle(&EnvAppearance)?;
            debug!(%preference, "theme toggled");
        }
        ThemeAction::Set { preference } => theme.set(preference, &EnvAppearance)?,
    }

    if ctx.cli.json {
        print_json(&output_theme_json(&theme));
    } else {
        print_theme(&theme, ctx.use_color);
    }
    Ok(())
}
