use super::open_store;
use crate::cli::parser::{AttendanceAction, Commands, MarkArgs};
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, MarkRequest, WorkingSource};
use crate::errors::AppResult;
use crate::models::{AttendanceDay, AttendanceStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_rate, colorize_status};
use crate::utils::date::{in_bounds, parse_date, parse_period};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Attendance { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    match action {
        AttendanceAction::Show { date } => {
            let date = parse_date(date)?;
            let (day, source) = AttendanceLogic::working_copy(&store, date)?;

            match source {
                WorkingSource::Stored => {
                    info(format!("Showing attendance for {}", day.date_str()));
                }
                WorkingSource::DefaultRoster => {
                    warning(format!(
                        "No attendance data found for {}. Showing default view.",
                        day.date_str()
                    ));
                }
            }
            print_day(&day);
        }

        AttendanceAction::Mark { date, marks } => {
            let date = parse_date(date)?;
            let day = AttendanceLogic::mark(&mut store, date, &to_request(marks)?)?;
            success(format!(
                "Attendance for {} has been saved successfully.",
                day.date_str()
            ));
            print_day(&day);
        }

        AttendanceAction::List { period } => {
            let bounds = parse_period(period.as_deref())?;
            let days: Vec<AttendanceDay> = store
                .attendance_days()?
                .into_iter()
                .filter(|d| in_bounds(d.date, bounds))
                .collect();

            if days.is_empty() {
                warning("No attendance saved for the selected period.");
                return Ok(());
            }

            let mut table = Table::new(&["date", "present", "absent", "late", "rate"]);
            for d in &days {
                let c = d.counts();
                table.add_row(vec![
                    d.date_str(),
                    c.present.to_string(),
                    c.absent.to_string(),
                    c.late.to_string(),
                    format!("{:.1}%", c.rate()),
                ]);
            }
            print!("{}", table.render());
        }

        AttendanceAction::Delete { date } => {
            let date = parse_date(date)?;
            if store.delete_attendance(date)? {
                success(format!("Attendance for {} deleted.", date.format("%Y-%m-%d")));
            } else {
                warning(format!(
                    "No attendance data found for {}.",
                    date.format("%Y-%m-%d")
                ));
            }
        }
    }

    Ok(())
}

fn to_request(marks: &MarkArgs) -> AppResult<MarkRequest> {
    let all = if marks.all_present {
        Some(AttendanceStatus::Present)
    } else if marks.all_absent {
        Some(AttendanceStatus::Absent)
    } else {
        marks
            .all
            .as_deref()
            .map(str::parse::<AttendanceStatus>)
            .transpose()?
    };

    Ok(MarkRequest {
        all,
        present: marks.present.clone(),
        absent: marks.absent.clone(),
        late: marks.late.clone(),
    })
}

fn print_day(day: &AttendanceDay) {
    let mut table = Table::new(&["id", "roll", "name", "status"]).align_right(0);
    for s in &day.students {
        table.add_row(vec![
            s.id.to_string(),
            s.roll_no.clone(),
            s.name.clone(),
            colorize_status(s.status),
        ]);
    }

    println!();
    print!("{}", table.render());

    let c = day.counts();
    println!(
        "\nPresent: {}  Absent: {}  Late: {}  Rate: {}{:.1}%{}",
        c.present,
        c.absent,
        c.late,
        color_for_rate(c.rate()),
        c.rate(),
        RESET
    );
}
