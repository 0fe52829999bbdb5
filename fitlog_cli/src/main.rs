use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use fitlog_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Local-first personal fitness journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Record (or replace) a day's metrics and get coaching feedback
    Log(LogArgs),

    /// Show the summary for one day
    Summary {
        /// Date to show (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List logged days, newest first
    History {
        /// week, month, or all
        #[arg(long, default_value = "week")]
        window: String,
    },

    /// Show a trailing trend for one metric
    Trends {
        /// water, activity, steps, calories, workouts, or weight
        #[arg(long)]
        metric: String,

        /// Window length in days (default 7; weight defaults to 30)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Show achievements and the current streak
    Achievements,

    /// Export the full history to CSV
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Display the saved profile
    Show,
    /// Create or replace the profile
    Set(ProfileArgs),
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    name: String,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height in centimetres
    #[arg(long)]
    height: u32,

    /// Current weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Target weight in kilograms
    #[arg(long)]
    goal_weight: f64,

    /// weight_loss, muscle_gain, maintenance, or endurance
    #[arg(long)]
    goal: String,

    /// low, medium, or high
    #[arg(long)]
    activity: String,
}

#[derive(Args)]
struct LogArgs {
    /// Date of the entry (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Morning weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Water intake in millilitres
    #[arg(long, default_value_t = 0)]
    water: u32,

    /// Free-text food log
    #[arg(long, default_value = "")]
    food: String,

    /// Estimated calorie intake
    #[arg(long, default_value_t = 0)]
    calories: u32,

    /// Step count
    #[arg(long, default_value_t = 0)]
    steps: u32,

    /// Active minutes
    #[arg(long, default_value_t = 0)]
    minutes: u32,

    /// Workout name (omit if there was no workout)
    #[arg(long)]
    workout: Option<String>,

    /// Workout duration in minutes
    #[arg(long, default_value_t = 0)]
    workout_minutes: u32,

    /// Workout intensity (free text)
    #[arg(long, default_value = "")]
    workout_intensity: String,

    /// Calories burned during the workout
    #[arg(long, default_value_t = 0)]
    workout_calories: u32,
}

fn main() -> Result<()> {
    fitlog_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);
    let store = Store::new(data_dir);

    match cli.command {
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd_profile_show(&store),
            ProfileAction::Set(args) => cmd_profile_set(&store, args),
        },
        Commands::Log(args) => cmd_log(&store, args),
        Commands::Summary { date } => cmd_summary(&store, date),
        Commands::History { window } => cmd_history(&store, &window),
        Commands::Trends { metric, days } => cmd_trends(&store, &metric, days),
        Commands::Achievements => cmd_achievements(&store),
        Commands::Export { output } => cmd_export(&store, &output),
    }
}

fn parse_goal(s: &str) -> Result<FitnessGoal> {
    match s.to_lowercase().as_str() {
        "weight_loss" => Ok(FitnessGoal::WeightLoss),
        "muscle_gain" => Ok(FitnessGoal::MuscleGain),
        "maintenance" => Ok(FitnessGoal::Maintenance),
        "endurance" => Ok(FitnessGoal::Endurance),
        other => Err(Error::Config(format!(
            "unknown goal '{other}' (expected weight_loss, muscle_gain, maintenance, or endurance)"
        ))),
    }
}

fn parse_activity(s: &str) -> Result<ActivityLevel> {
    match s.to_lowercase().as_str() {
        "low" => Ok(ActivityLevel::Low),
        "medium" => Ok(ActivityLevel::Medium),
        "high" => Ok(ActivityLevel::High),
        other => Err(Error::Config(format!(
            "unknown activity level '{other}' (expected low, medium, or high)"
        ))),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn cmd_profile_set(store: &Store, args: ProfileArgs) -> Result<()> {
    // Editing replaces the profile wholesale but keeps the original
    // creation time
    let created_at = store
        .load_profile()?
        .map_or_else(Utc::now, |p| p.created_at);

    let profile = Profile {
        name: args.name,
        age: args.age,
        height_cm: args.height,
        weight_kg: args.weight,
        goal_weight_kg: args.goal_weight,
        goal: parse_goal(&args.goal)?,
        activity_level: parse_activity(&args.activity)?,
        created_at,
    };

    store.save_profile(&profile)?;

    println!("✓ Profile saved");
    display_profile(&profile);
    Ok(())
}

fn cmd_profile_show(store: &Store) -> Result<()> {
    match store.load_profile()? {
        Some(profile) => display_profile(&profile),
        None => println!("No profile yet. Create one with `fitlog profile set`."),
    }
    Ok(())
}

fn cmd_log(store: &Store, args: LogArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(today);

    let workout = args.workout.map(|name| Workout {
        name,
        duration_minutes: args.workout_minutes,
        intensity: args.workout_intensity.clone(),
        calories: args.workout_calories,
    });

    let entry = DailyEntry {
        date,
        weight_kg: args.weight,
        water_ml: args.water,
        food: args.food,
        calories: args.calories,
        steps: args.steps,
        activity_minutes: args.minutes,
        workout,
        recorded_at: Utc::now(),
    };

    let mut journal = store.load_journal()?;
    let replaced = journal.upsert(entry.clone());
    store.save_journal(&journal)?;

    if replaced {
        println!("✓ Entry for {date} replaced");
    } else {
        println!("✓ Entry for {date} saved");
    }

    display_entry(&entry);

    let profile = store.load_profile()?;
    let set = recommend(&entry, profile.as_ref());
    display_recommendations(&set);

    let streak = compute_streak(&journal, today());
    println!("Current streak: {streak} day(s)");

    let state = store.load_achievements()?;
    let (state, newly_unlocked) = evaluate_achievements(&journal, &state, today());
    if !newly_unlocked.is_empty() {
        store.save_achievements(&state)?;
        println!();
        for id in &newly_unlocked {
            let def = ACHIEVEMENTS.iter().find(|a| a.id == *id);
            match def {
                Some(def) => println!("🏆 Achievement unlocked: {}", def.title),
                None => println!("🏆 Achievement unlocked: {id}"),
            }
        }
    }

    Ok(())
}

fn cmd_summary(store: &Store, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let journal = store.load_journal()?;

    match journal.get(date) {
        Some(entry) => display_entry(entry),
        None => println!("No entry for {date}."),
    }
    Ok(())
}

fn cmd_history(store: &Store, window: &str) -> Result<()> {
    let journal = store.load_journal()?;

    let entries = match window {
        "week" => journal.entries_since(today() - chrono::Duration::days(7)),
        "month" => journal.entries_since(today() - chrono::Duration::days(30)),
        "all" => journal.entries_desc(),
        other => {
            return Err(Error::Config(format!(
                "unknown window '{other}' (expected week, month, or all)"
            )))
        }
    };

    if entries.is_empty() {
        println!("No entries logged.");
        return Ok(());
    }

    println!(
        "{:<12} {:>7} {:>7} {:>7} {:>7} {:>5}  {}",
        "date", "weight", "water", "kcal", "steps", "min", "workout"
    );
    for entry in entries {
        let weight = entry
            .weight_kg
            .map_or_else(|| "-".to_string(), |w| format!("{w:.1}"));
        let workout = entry.workout.as_ref().map_or("-", |w| w.name.as_str());
        println!(
            "{:<12} {:>7} {:>7} {:>7} {:>7} {:>5}  {}",
            entry.date.to_string(),
            weight,
            entry.water_ml,
            entry.calories,
            entry.steps,
            entry.activity_minutes,
            workout
        );
    }
    Ok(())
}

fn cmd_trends(store: &Store, metric: &str, days: Option<u32>) -> Result<()> {
    let journal = store.load_journal()?;

    if metric.eq_ignore_ascii_case("weight") {
        let days = days.unwrap_or(30);
        let points = weight_window(&journal, days as usize);
        if points.is_empty() {
            println!("No weigh-ins recorded.");
            return Ok(());
        }
        for (date, weight) in &points {
            println!("{date}  {weight:.1} kg");
        }
        if let Some(profile) = store.load_profile()? {
            if let Some(summary) = weight_summary(&journal, &profile) {
                println!();
                println!("Start:   {:.1} kg", summary.start_kg);
                println!("Current: {:.1} kg", summary.current_kg);
                println!("Goal:    {:.1} kg", summary.goal_kg);
                println!("Change:  {:+.1} kg", summary.change_kg);
            }
        }
        return Ok(());
    }

    let parsed = match metric.to_lowercase().as_str() {
        "water" => Metric::Water,
        "activity" => Metric::ActivityMinutes,
        "steps" => Metric::Steps,
        "calories" => Metric::Calories,
        "workouts" => Metric::WorkoutDone,
        other => {
            return Err(Error::Config(format!(
                "unknown metric '{other}' (expected water, activity, steps, calories, workouts, or weight)"
            )))
        }
    };

    let days = days.unwrap_or(7);
    for (date, value) in windowed(&journal, days, today(), parsed) {
        println!("{date}  {value}");
    }

    if metric.eq_ignore_ascii_case("workouts") {
        let totals = workout_totals(&journal);
        println!();
        println!(
            "Total: {} workout(s), {} min, {} kcal burned",
            totals.count, totals.minutes, totals.calories
        );
    }
    Ok(())
}

fn cmd_achievements(store: &Store) -> Result<()> {
    let journal = store.load_journal()?;
    let state = store.load_achievements()?;
    let streak = compute_streak(&journal, today());

    println!("Current streak: {streak} day(s)");
    println!(
        "Achievements unlocked: {}/{}",
        state.unlocked_count(),
        ACHIEVEMENTS.len()
    );
    println!();

    for def in &ACHIEVEMENTS {
        let marker = if state.is_unlocked(def.id) { "x" } else { " " };
        println!("[{marker}] {} — {}", def.title, def.description);
    }
    Ok(())
}

fn cmd_export(store: &Store, output: &PathBuf) -> Result<()> {
    let journal = store.load_journal()?;
    let count = export_csv(&journal, output)?;
    println!("✓ Exported {count} entries to {}", output.display());
    Ok(())
}

fn display_profile(profile: &Profile) {
    let bmr = compute_bmr(Some(profile));
    let tdee = compute_tdee(bmr, Some(profile.activity_level));

    println!();
    println!("  {}", profile.name);
    println!("  Age:         {} years", profile.age);
    println!("  Height:      {} cm", profile.height_cm);
    println!("  Weight:      {:.1} kg", profile.weight_kg);
    println!("  Goal weight: {:.1} kg", profile.goal_weight_kg);
    println!("  Goal:        {}", profile.goal.label());
    println!("  Activity:    {}", profile.activity_level.label());
    println!("  BMI:         {:.1}", profile.bmi());
    println!("  BMR:         {bmr} kcal/day");
    println!("  TDEE:        {tdee} kcal/day");
    println!();
}

fn display_entry(entry: &DailyEntry) {
    println!();
    println!("  Entry for {}", entry.date);
    if let Some(weight) = entry.weight_kg {
        println!("  Weight:   {weight:.1} kg");
    }
    println!("  Water:    {} ml", entry.water_ml);
    println!("  Calories: {} kcal", entry.calories);
    println!("  Steps:    {}", entry.steps);
    println!("  Activity: {} min", entry.activity_minutes);
    if !entry.food.is_empty() {
        println!("  Food:     {}", entry.food);
    }
    if let Some(ref workout) = entry.workout {
        println!(
            "  Workout:  {} ({} min, {}, {} kcal)",
            workout.name, workout.duration_minutes, workout.intensity, workout.calories
        );
    }
    println!();
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "ok",
        Severity::Info => "info",
        Severity::Warning => "warn",
        Severity::Danger => "alert",
    }
}

fn topic_title(topic: Topic) -> &'static str {
    match topic {
        Topic::Water => "Water",
        Topic::Calories => "Calories",
        Topic::Activity => "Activity",
        Topic::Food => "Food",
    }
}

fn display_recommendations(set: &RecommendationSet) {
    println!("╭─────────────────────────────────────────╮");
    println!("│  TODAY'S COACHING                       │");
    println!("╰─────────────────────────────────────────╯");

    for rec in &set.recommendations {
        println!();
        println!(
            "  [{}] {}: {}",
            severity_tag(rec.severity),
            topic_title(rec.topic),
            rec.message
        );
        for tip in &rec.tips {
            println!("      → {tip}");
        }
    }

    println!();
    println!("  Plan for tomorrow:");
    for item in &set.tomorrow_plan {
        println!("      ✓ {item}");
    }
    println!();
}
