//! Staff roster, attendance and payroll

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AttendanceRecord, AttendanceStatus, HotelSite, PayrollLine, StaffCreate, StaffMember,
    StaffStatus, StaffUpdate,
};
use shared::util::new_id;

use super::{ensure_operating, require_text};
use crate::storage::{LocalStore, StorageKey};
use crate::utils::time::{today, validate_not_future};

/// Payroll month length in days
pub const PAYROLL_DAYS: i64 = 30;

#[derive(Clone)]
pub struct StaffService {
    store: LocalStore,
    tz: Tz,
}

impl StaffService {
    pub fn new(store: LocalStore, tz: Tz) -> Self {
        Self { store, tz }
    }

    pub fn list(&self, site: HotelSite) -> AppResult<Vec<StaffMember>> {
        ensure_operating(site)?;
        Ok(self.store.read_or_default(&StorageKey::Staff(site)))
    }

    pub fn add(&self, site: HotelSite, payload: StaffCreate) -> AppResult<StaffMember> {
        ensure_operating(site)?;
        let name = require_text("name", &payload.name)?;
        let function = require_text("function", &payload.function)?;
        check_salary(payload.monthly_base_salary)?;

        let member = StaffMember {
            id: new_id(),
            name,
            function,
            phone: payload.phone.trim().to_string(),
            site,
            monthly_base_salary: payload.monthly_base_salary,
            attendance: Vec::new(),
            previous_month_salary: Decimal::ZERO,
            status: payload.status.unwrap_or(StaffStatus::OnDuty),
        };
        self.store
            .update(&StorageKey::Staff(site), |list: &mut Vec<StaffMember>| {
                list.push(member.clone());
                Ok(())
            })?;
        tracing::info!(site = %site, staff = %member.name, "Staff member added");
        Ok(member)
    }

    pub fn update(&self, site: HotelSite, id: &str, payload: StaffUpdate) -> AppResult<StaffMember> {
        ensure_operating(site)?;
        let name = payload.name.as_deref().map(|n| require_text("name", n)).transpose()?;
        let function = payload
            .function
            .as_deref()
            .map(|f| require_text("function", f))
            .transpose()?;
        if let Some(salary) = payload.monthly_base_salary {
            check_salary(salary)?;
        }

        self.modify(site, id, |member| {
            if let Some(name) = name {
                member.name = name;
            }
            if let Some(function) = function {
                member.function = function;
            }
            if let Some(phone) = payload.phone {
                member.phone = phone.trim().to_string();
            }
            if let Some(salary) = payload.monthly_base_salary {
                member.monthly_base_salary = salary;
            }
            if let Some(previous) = payload.previous_month_salary {
                member.previous_month_salary = previous;
            }
            if let Some(status) = payload.status {
                member.status = status;
            }
            Ok(())
        })
    }

    pub fn delete(&self, site: HotelSite, id: &str) -> AppResult<()> {
        ensure_operating(site)?;
        self.store
            .update(&StorageKey::Staff(site), |list: &mut Vec<StaffMember>| {
                let before = list.len();
                list.retain(|m| m.id != id);
                if list.len() == before {
                    return Err(staff_not_found(id));
                }
                Ok(())
            })
    }

    /// Record presence or absence, replacing any record for that day
    pub fn mark_attendance(
        &self,
        site: HotelSite,
        id: &str,
        status: AttendanceStatus,
        date: Option<NaiveDate>,
    ) -> AppResult<StaffMember> {
        ensure_operating(site)?;
        if status == AttendanceStatus::Justified {
            return Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                "Only Présent or Absent can be marked",
            ));
        }
        let date = date.unwrap_or_else(|| today(self.tz));
        validate_not_future(date, self.tz)?;

        self.modify(site, id, |member| {
            member.attendance.retain(|r| r.date != date);
            member.attendance.push(AttendanceRecord { date, status });
            Ok(())
        })
    }

    /// Turn an absence into a justified absence
    pub fn justify(&self, site: HotelSite, id: &str, date: Option<NaiveDate>) -> AppResult<StaffMember> {
        ensure_operating(site)?;
        let date = date.unwrap_or_else(|| today(self.tz));
        self.modify(site, id, |member| {
            let record = member
                .attendance
                .iter_mut()
                .find(|r| r.date == date)
                .ok_or_else(|| {
                    AppError::new(ErrorCode::AttendanceNotFound).with_detail("date", date.to_string())
                })?;
            if record.status != AttendanceStatus::Absent {
                return Err(AppError::new(ErrorCode::AttendanceNotAbsent)
                    .with_detail("date", date.to_string()));
            }
            record.status = AttendanceStatus::Justified;
            Ok(())
        })
    }

    pub fn payroll(&self, site: HotelSite) -> AppResult<Vec<PayrollLine>> {
        Ok(self.list(site)?.iter().map(payroll_line).collect())
    }

    /// Present / absent counts for one day
    pub fn presence_on(&self, site: HotelSite, date: NaiveDate) -> AppResult<(usize, usize)> {
        let staff = self.list(site)?;
        let count = |status: AttendanceStatus| {
            staff
                .iter()
                .filter(|m| m.attendance_on(date) == Some(status))
                .count()
        };
        Ok((count(AttendanceStatus::Present), count(AttendanceStatus::Absent)))
    }

    fn modify<F>(&self, site: HotelSite, id: &str, f: F) -> AppResult<StaffMember>
    where
        F: FnOnce(&mut StaffMember) -> AppResult<()>,
    {
        self.store
            .update(&StorageKey::Staff(site), |list: &mut Vec<StaffMember>| {
                let member = list
                    .iter_mut()
                    .find(|m| m.id == id)
                    .ok_or_else(|| staff_not_found(id))?;
                f(member)?;
                Ok(member.clone())
            })
    }
}

/// Net pay: monthly / 30 per day, minus one day per unjustified absence
///
/// Absences count every `Absent` record on file, so the net goes negative
/// past 30 of them.
pub fn payroll_line(member: &StaffMember) -> PayrollLine {
    let days = Decimal::from(PAYROLL_DAYS);
    let daily_rate = member.monthly_base_salary / days;
    let absences = member.absences();
    let worked = days - Decimal::from(absences);
    PayrollLine {
        staff_id: member.id.clone(),
        name: member.name.clone(),
        function: member.function.clone(),
        monthly_base_salary: member.monthly_base_salary,
        daily_rate: daily_rate.round_dp(2),
        absences,
        net_salary: (daily_rate * worked).round_dp(2),
    }
}

fn check_salary(salary: Decimal) -> AppResult<()> {
    if salary < Decimal::ZERO {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "Salary cannot be negative",
        ));
    }
    Ok(())
}

fn staff_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::StaffMemberNotFound).with_detail("id", id)
}
