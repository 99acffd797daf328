//! Staff, attendance and payroll

use super::HotelSite;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "Présent")]
    Present,
    Absent,
    #[serde(rename = "Justifié")]
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffStatus {
    #[serde(rename = "En poste")]
    OnDuty,
    #[serde(rename = "En congé")]
    OnLeave,
    Midi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub function: String,
    #[serde(default)]
    pub phone: String,
    pub site: HotelSite,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_base_salary: Decimal,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub previous_month_salary: Decimal,
    pub status: StaffStatus,
}

impl StaffMember {
    pub fn attendance_on(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.attendance
            .iter()
            .find(|r| r.date == date)
            .map(|r| r.status)
    }

    /// Unjustified absences
    pub fn absences(&self) -> usize {
        self.attendance
            .iter()
            .filter(|r| r.status == AttendanceStatus::Absent)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub function: String,
    #[serde(default)]
    pub phone: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_base_salary: Decimal,
    #[serde(default)]
    pub status: Option<StaffStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub function: Option<String>,
    pub phone: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub monthly_base_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub previous_month_salary: Option<Decimal>,
    pub status: Option<StaffStatus>,
}

/// Attendance payload; `date` defaults to the business day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub status: AttendanceStatus,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceJustify {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Payroll line for one staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLine {
    pub staff_id: String,
    pub name: String,
    pub function: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_base_salary: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_rate: Decimal,
    pub absences: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
}
