use std::env;
use std::fs::{self, File};

use log::{LevelFilter, info};
use mediqueue_admin::{
    AdminConfig, AdminError, Bed, BedStats, Doctor, EntityManager, InMemoryRepository, paths,
    seed,
};
use simplelog::{Config, WriteLogger};

fn init_logging(level: LevelFilter) -> Result<(), AdminError> {
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(level, Config::default(), File::create(&log_path)?)?;
    Ok(())
}

fn run() -> Result<(), AdminError> {
    let config = AdminConfig::load_default()?;
    init_logging(config.log_level())?;

    let term = env::args().nth(1).unwrap_or_default();
    info!("Starting admin overview (search: {:?})", term);

    let doctors: EntityManager<Doctor> =
        EntityManager::new(InMemoryRepository::from_records(seed::doctors()));
    let beds: EntityManager<Bed> =
        EntityManager::new(InMemoryRepository::from_records(seed::beds()));

    println!("{}", config.hospital.name);
    println!("{}", BedStats::from_beds(&beds.list()));
    println!();

    println!("Doctors");
    let found = doctors.search(&term);
    if found.is_empty() {
        println!("  No doctors found");
    }
    for doctor in found {
        println!(
            "  {:>3}  {:<20} {:<14} {:<14} {:<26} {:<12} {}",
            doctor.id,
            doctor.full_name(),
            doctor.speciality,
            doctor.department,
            doctor.email,
            doctor.phone,
            doctor.status.label()
        );
    }
    println!();

    println!("Beds");
    let found = beds.search(&term);
    if found.is_empty() {
        println!("  No beds found");
    }
    for bed in found {
        let patient = match (&bed.patient_name, bed.admission_date) {
            (Some(name), Some(date)) => format!("{name} (since {date})"),
            (Some(name), None) => name.clone(),
            _ => String::new(),
        };
        println!(
            "  {:>3}  {:<6} {:<10} {:<12} {:<16} {:<18} {}",
            bed.id,
            bed.number,
            bed.room,
            bed.department,
            bed.bed_type,
            bed.status.label(),
            patient
        );
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
