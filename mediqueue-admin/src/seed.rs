//! Demo records shown when the admin starts without data.

use chrono::NaiveDate;

use crate::entity::{Bed, BedStatus, Doctor, DoctorStatus};

fn doctor(
    id: u32,
    name: (&str, &str),
    speciality: &str,
    email: &str,
    phone: &str,
    status: DoctorStatus,
) -> Doctor {
    Doctor {
        id,
        first_name: name.0.to_string(),
        last_name: name.1.to_string(),
        speciality: speciality.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: speciality.to_string(),
        status,
    }
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            1,
            ("John", "Smith"),
            "Cardiology",
            "j.smith@hospital.com",
            "1234567890",
            DoctorStatus::Active,
        ),
        doctor(
            2,
            ("Mary", "Johnson"),
            "Pediatrics",
            "m.johnson@hospital.com",
            "0987654321",
            DoctorStatus::Active,
        ),
        doctor(
            3,
            ("Peter", "Brown"),
            "Surgery",
            "p.brown@hospital.com",
            "1122334455",
            DoctorStatus::Inactive,
        ),
    ]
}

fn bed(id: u32, department: &str, bed_type: &str, status: BedStatus) -> Bed {
    Bed {
        id,
        number: format!("B{id:03}"),
        room: format!("Room {}", 100 + id),
        department: department.to_string(),
        bed_type: bed_type.to_string(),
        status,
        patient_name: None,
        admission_date: None,
    }
}

pub fn beds() -> Vec<Bed> {
    let mut first = bed(1, "Cardiology", "Standard", BedStatus::Occupied);
    first.patient_name = Some("John Doe".to_string());
    first.admission_date = NaiveDate::from_ymd_opt(2024, 1, 15);

    let mut third = bed(3, "Pediatrics", "Pediatric", BedStatus::Occupied);
    third.patient_name = Some("Marie Smith".to_string());
    third.admission_date = NaiveDate::from_ymd_opt(2024, 1, 20);

    vec![
        first,
        bed(2, "Cardiology", "Standard", BedStatus::Available),
        third,
        bed(4, "Surgery", "Intensive Care", BedStatus::Maintenance),
        bed(5, "Emergency", "Standard", BedStatus::Reserved),
    ]
}
