use crate::Optimization::pressure_sweep::{pressure_sweep, pressure_table};
use crate::ReactorsIVP::PackedBedIVP::{ReactorError, ReactorState};
use crate::Utils::save_to_csv::save_history_csv;
use crate::Utils::task_file::{DEFAULT_TASK_FILE, ReactorTask, create_template};
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// bed length of the pressure study when the user gives none, m
const PRESSURE_STUDY_BED_LENGTH: f64 = 5.0;

pub fn run_interactive_menu() {
    let stdin = io::stdin();
    run_menu(&mut stdin.lock());
}

/// Menu loop over any line source; returns on "0" or at the end of input
pub fn run_menu<R: BufRead>(input: &mut R) {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input(input) else {
            println!();
            break;
        };

        let outcome = match choice.trim() {
            "1" => two_bed_simulation(input),
            "2" => inlet_temperature_optimisation(input),
            "3" => pressure_study(input),
            "4" => write_template(input),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            error!("{}", e);
            println!("\x1b[31mCalculation failed: {}\x1b[0m", e);
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - failed calculations
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Ammonia synthesis converter: two adiabatic catalyst beds in series \n\x1b[0m"
    );
    println!("\x1b[33m1. Two-bed simulation\x1b[0m");
    println!("\x1b[33m2. Optimum inlet temperature of bed 1\x1b[0m");
    println!("\x1b[33m3. Pressure study of bed 1\x1b[0m");
    println!("\x1b[33m4. Generate template task file\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    if let Err(e) = io::stdout().flush() {
        error!("failed to flush stdout: {}", e);
    }
}

/// `None` at the end of input or when it cannot be read
fn get_user_input<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            error!("failed to read input: {}", e);
            None
        }
    }
}

/// closed input counts as "no"
fn confirm<R: BufRead>(input: &mut R, text: &str) -> bool {
    prompt(text);
    let answer = get_user_input(input)
        .map(|a| a.trim().to_lowercase())
        .unwrap_or_default();
    answer == "y" || answer == "yes"
}

/// Asks for a task file; an empty answer selects the reference design,
/// closed input gives `None`
fn ask_task<R: BufRead>(input: &mut R) -> Result<Option<ReactorTask>, ReactorError> {
    prompt("Task file (Enter for the reference design): ");
    let Some(answer) = get_user_input(input) else {
        return Ok(None);
    };
    let path = answer.trim();
    if path.is_empty() {
        Ok(Some(ReactorTask::default()))
    } else {
        ReactorTask::load(&PathBuf::from(path)).map(Some)
    }
}

fn offer_csv<R: BufRead>(
    input: &mut R,
    state: &ReactorState,
    default_name: &str,
) -> Result<(), ReactorError> {
    if confirm(input, &format!("Save history to {}? (y/n): ", default_name)) {
        save_history_csv(state, &PathBuf::from(default_name))?;
        println!("History saved to {}", default_name);
    }
    Ok(())
}

fn two_bed_simulation<R: BufRead>(input: &mut R) -> Result<(), ReactorError> {
    let Some(task) = ask_task(input)? else {
        return Ok(());
    };
    match task.bed_series() {
        Some(series) => {
            let result = series.run()?;
            result.bed_1.pretty_print("Bed 1");
            result.bed_2.pretty_print("Bed 2");
            println!(
                "Bed-2 feed sized with bed-1 conversion {:.5}",
                result.carryover
            );
            println!(
                "\x1b[34mOverall nitrogen conversion: {:.5}\x1b[0m",
                result.overall_conversion()
            );
            offer_csv(input, &result.bed_1, "bed_1_history.csv")?;
            offer_csv(input, &result.bed_2, "bed_2_history.csv")?;
        }
        None => {
            let state = ReactorState::simulate(task.bed_1)?;
            state.pretty_print("Bed 1");
            offer_csv(input, &state, "bed_1_history.csv")?;
        }
    }
    Ok(())
}

fn inlet_temperature_optimisation<R: BufRead>(input: &mut R) -> Result<(), ReactorError> {
    let Some(task) = ask_task(input)? else {
        return Ok(());
    };
    let result = task.inlet_sweep().run()?;
    result.pretty_print();
    if result.best_below_limit().is_none() {
        println!(
            "No inlet temperature keeps the outlet below {} K",
            result.catalyst_limit
        );
    }
    Ok(())
}

fn pressure_study<R: BufRead>(input: &mut R) -> Result<(), ReactorError> {
    let Some(task) = ask_task(input)? else {
        return Ok(());
    };
    prompt(&format!(
        "Bed length, m (Enter for {}): ",
        PRESSURE_STUDY_BED_LENGTH
    ));
    let Some(answer) = get_user_input(input) else {
        return Ok(());
    };
    let length = match answer.trim() {
        "" => PRESSURE_STUDY_BED_LENGTH,
        s => s.parse::<f64>().map_err(|e| {
            ReactorError::InvalidConfiguration(format!("bed length '{}': {}", s, e))
        })?,
    };
    let base = task.bed_1.clone().with_bed_length(length);
    let profiles = pressure_sweep(&base, &task.pressures, task.sweep.catalyst_limit)?;
    println!("\n=== Bed 1 at {} m ===", length);
    pressure_table(&profiles).printstd();
    Ok(())
}

fn write_template<R: BufRead>(input: &mut R) -> Result<(), ReactorError> {
    prompt(&format!("Template file (Enter for {}): ", DEFAULT_TASK_FILE));
    let Some(answer) = get_user_input(input) else {
        return Ok(());
    };
    let path = match answer.trim() {
        "" => DEFAULT_TASK_FILE,
        s => s,
    };
    create_template(&PathBuf::from(path))?;
    println!("Template generated successfully!");
    Ok(())
}
