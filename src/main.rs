use std::io::Write;

use ghin_stats::SessionManager;
use ghin_stats::args;
use ghin_stats::controller::ghin::GhinClient;
use ghin_stats::model::Round;
use ghin_stats::view::score::{HoleStatsTable, SortColumn, format_vs_par, sign_shape, to_series};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = args::args_checks();

    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_password(&args.ghin)?,
    };

    let client = GhinClient::new(&args.base_url);
    let manager = SessionManager::new(client);

    let summary = match manager.login_and_fetch(&args.ghin, &password).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(session) = manager.session().await {
        println!("Signed in as {}", session.golfer_name);
    }

    if summary.total_rounds == 0 {
        println!("No scores found in your GHIN account.");
        return Ok(());
    }
    println!(
        "{} total rounds found, {} with hole-by-hole data.",
        summary.total_rounds, summary.with_hole_detail
    );

    match args.course_id {
        Some(course_id) => {
            print_hole_stats(&manager, course_id, args.sort.as_deref(), args.desc).await;
        }
        None => print_course_catalog(&manager).await,
    }

    Ok(())
}

fn prompt_password(ghin: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("GHIN password for {ghin}: ");
    std::io::stdout().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

async fn print_course_catalog(manager: &SessionManager) {
    let courses = manager.courses().await;
    let rounds = manager.rounds().await;

    println!("\nCourses:");
    for course in &courses {
        let tee_label = if course.tee.is_empty() {
            String::new()
        } else {
            format!(" ({})", course.tee)
        };
        let plural = if course.round_count == 1 {
            "round"
        } else {
            "rounds"
        };
        let last = last_played(&rounds, course.course_id)
            .map(|date| format!(", last played {date}"))
            .unwrap_or_default();
        println!(
            "  [{}] {}{} - {} {}{}",
            course.course_id, course.name, tee_label, course.round_count, plural, last
        );
    }
}

fn last_played(rounds: &[Round], course_id: i64) -> Option<chrono::NaiveDate> {
    rounds
        .iter()
        .filter(|r| r.course_id == Some(course_id))
        .filter_map(|r| r.played_at)
        .max()
}

async fn print_hole_stats(
    manager: &SessionManager,
    course_id: i64,
    sort: Option<&str>,
    desc: bool,
) {
    let stats = match manager.hole_stats(course_id).await {
        Some(stats) if !stats.is_empty() => stats,
        _ => {
            println!(
                "No hole-by-hole data available for this course. Scores may have been posted as totals only."
            );
            return;
        }
    };

    let mut table = HoleStatsTable::new(stats);
    if let Some(column) = sort.and_then(SortColumn::from_name) {
        table.sort_by(column);
        if desc {
            table.sort_by(column);
        }
    }

    println!(
        "\n{:>5} {:>4} {:>6} {:>6} {:>7} {:>5} {:>6} {:>7}",
        "Hole", "Par", "Avg", "VsPar", "StdDev", "Best", "Worst", "Rounds"
    );
    for row in table.rows() {
        println!(
            "{:>5} {:>4} {:>6.2} {:>6} {:>7.2} {:>5} {:>6} {:>7}",
            row.hole,
            row.par,
            row.avg,
            format_vs_par(row.vs_par),
            row.std_dev,
            row.best,
            row.worst,
            row.rounds
        );
    }

    let totals = table.totals();
    println!(
        "{:>5} {:>4} {:>6.2} {:>6} {:>7} {:>5} {:>6} {:>7}",
        "Total",
        totals.par,
        totals.avg,
        format_vs_par(totals.vs_par),
        "",
        totals.best,
        totals.worst,
        totals.rounds
    );

    let strip: Vec<String> = to_series(table.rows())
        .iter()
        .map(|point| {
            format!(
                "{}:{}{}",
                point.label,
                sign_shape(point.sign),
                format_vs_par(point.vs_par)
            )
        })
        .collect();
    println!("\n{}", strip.join("  "));
}
