use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{AttendanceReport, ReportLogic};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;
use crate::utils::prompt::ensure_writable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        students,
        file,
        force,
    } = cmd
    {
        let bounds = parse_period(period.as_deref())?;
        let store = open_store(cfg)?;
        let report = ReportLogic::build(&store, bounds)?;

        if report.days.is_empty() {
            warning("No attendance saved for the selected period. Nothing to report.");
            return Ok(());
        }

        if let Some(f) = file {
            let path = expand_tilde(f);
            ensure_writable(&path, *force)?;
            if *students {
                ReportLogic::write_students_csv(&report, &path)?;
            } else {
                ReportLogic::write_daily_csv(&report, &path)?;
            }
            success(format!("Report written: {}", path.display()));
            return Ok(());
        }

        if *students {
            print_students(&report);
        } else {
            print_daily(&report);
        }
    }
    Ok(())
}

fn print_daily(report: &AttendanceReport) {
    let mut table = Table::new(&["date", "present", "absent", "late", "total", "rate"]);
    for d in &report.days {
        table.add_row(vec![
            d.date.format("%Y-%m-%d").to_string(),
            d.counts.present.to_string(),
            d.counts.absent.to_string(),
            d.counts.late.to_string(),
            d.counts.total().to_string(),
            format!("{:.1}%", d.counts.rate()),
        ]);
    }
    print!("{}", table.render());

    println!(
        "\nDays: {}  Total present: {}  Average daily rate: {:.1}%",
        report.days.len(),
        report.totals.present,
        report.average_daily_rate()
    );
}

fn print_students(report: &AttendanceReport) {
    let mut table = Table::new(&["id", "roll", "name", "present", "absent", "late", "rate"]);
    for s in &report.students {
        table.add_row(vec![
            s.id.to_string(),
            s.roll_no.clone(),
            s.name.clone(),
            s.counts.present.to_string(),
            s.counts.absent.to_string(),
            s.counts.late.to_string(),
            format!("{:.1}%", s.counts.rate()),
        ]);
    }
    print!("{}", table.render());

    println!(
        "\nStudents: {}  Perfect attendance: {}",
        report.students.len(),
        report.perfect_attendance()
    );
}
