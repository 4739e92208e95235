use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::StatusCounts;
use crate::storage::KeyValueStore;
use crate::utils::date::in_bounds;
use chrono::NaiveDate;
use csv::Writer;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub id: u32,
    pub name: String,
    pub roll_no: String,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceReport {
    pub days: Vec<DailyRow>,
    pub students: Vec<StudentRow>,
    pub totals: StatusCounts,
}

impl AttendanceReport {
    pub fn average_daily_rate(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.days.iter().map(|d| d.counts.rate()).sum::<f64>() / self.days.len() as f64
    }

    pub fn perfect_attendance(&self) -> usize {
        self.students
            .iter()
            .filter(|s| s.counts.total() > 0 && s.counts.absent == 0)
            .count()
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Daily and per-student statistics over the stored attendance.
    /// Names come from the latest day a student appears on.
    pub fn build<S: KeyValueStore>(
        store: &RecordStore<S>,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<AttendanceReport> {
        let mut report = AttendanceReport::default();
        let mut per_student: BTreeMap<u32, StudentRow> = BTreeMap::new();

        for day in store
            .attendance_days()?
            .into_iter()
            .filter(|d| in_bounds(d.date, bounds))
        {
            let counts = day.counts();
            report.totals.present += counts.present;
            report.totals.absent += counts.absent;
            report.totals.late += counts.late;
            report.days.push(DailyRow {
                date: day.date,
                counts,
            });

            for rec in day.students {
                let row = per_student.entry(rec.id).or_insert_with(|| StudentRow {
                    id: rec.id,
                    name: String::new(),
                    roll_no: String::new(),
                    counts: StatusCounts::default(),
                });
                row.name = rec.name;
                row.roll_no = rec.roll_no;
                row.counts.add(rec.status);
            }
        }

        report.students = per_student.into_values().collect();
        Ok(report)
    }

    pub fn write_daily_csv(report: &AttendanceReport, path: &Path) -> AppResult<()> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(["date", "present", "absent", "late", "total", "rate"])?;

        for d in &report.days {
            wtr.write_record(&[
                d.date.format("%Y-%m-%d").to_string(),
                d.counts.present.to_string(),
                d.counts.absent.to_string(),
                d.counts.late.to_string(),
                d.counts.total().to_string(),
                format!("{:.1}", d.counts.rate()),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn write_students_csv(report: &AttendanceReport, path: &Path) -> AppResult<()> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(["id", "roll_no", "name", "present", "absent", "late", "rate"])?;

        for s in &report.students {
            wtr.write_record(&[
                s.id.to_string(),
                s.roll_no.clone(),
                s.name.clone(),
                s.counts.present.to_string(),
                s.counts.absent.to_string(),
                s.counts.late.to_string(),
                format!("{:.1}", s.counts.rate()),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
