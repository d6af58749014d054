mod cli;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::info;

use busdays::calendars::{
    business_dates, compute_business_day, federal_cal, federal_holidays, fmt_mdy, parse_mdy,
    DateRoll,
};

use crate::cli::{AddArgs, Cli, Command, HolidaysArgs, ShowArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Add(args) => add(args),
        Command::Holidays(args) => holidays(args),
        Command::Show(args) => show(args),
    }
}

fn add(args: AddArgs) -> Result<()> {
    let start = parse_mdy(&args.start)?;
    let result = compute_business_day(&start, args.days)?;
    info!(start = %fmt_mdy(&start), days = args.days, result = %fmt_mdy(&result), "computed");

    if args.list {
        let dates = business_dates(&start, args.days)?;
        if args.json {
            let out = json!({
                "start": fmt_mdy(&start),
                "days": args.days,
                "dates": dates.iter().map(fmt_mdy).collect::<Vec<_>>(),
                "result": fmt_mdy(&result),
            });
            println!("{out}");
        } else {
            for date in &dates {
                println!("{}", fmt_mdy(date));
            }
        }
    } else if args.json {
        let out = json!({
            "start": fmt_mdy(&start),
            "days": args.days,
            "result": fmt_mdy(&result),
        });
        println!("{out}");
    } else {
        println!("{}", fmt_mdy(&result));
    }
    Ok(())
}

fn holidays(args: HolidaysArgs) -> Result<()> {
    let dates = federal_holidays(args.year);
    if args.json {
        let out = json!({
            "year": args.year,
            "holidays": dates.iter().map(fmt_mdy).collect::<Vec<_>>(),
        });
        println!("{out}");
    } else {
        for date in &dates {
            println!("{}", fmt_mdy(date));
        }
    }
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    // adjacent years included so holidays observed across the year boundary render
    let cal = federal_cal(args.year - 1, args.year + 1);
    match args.month {
        Some(month) if (1..=12).contains(&month) => {
            print!("{}", cal.print_month(args.year, month));
        }
        Some(month) => anyhow::bail!("month must be between 1 and 12, got {month}"),
        None => print!("{}", cal.print_year(args.year)),
    }
    Ok(())
}
