pub mod logger;
pub mod save_to_csv;
/// JSON task files
/// # Examples
/// ```
/// use AmmoniaSynth::Utils::task_file::ReactorTask;
/// let task = ReactorTask::default();
/// assert!(task.bed_series().is_some());
/// assert_eq!(task.pressures.len(), 5);
/// ```
pub mod task_file;
mod utils_tests;
