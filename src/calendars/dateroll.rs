use chrono::prelude::*;
use chrono::Days;

use crate::error::CalendarError;

/// Simple date adjustment defining business days, holidays and rolling.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDateTime) -> bool {
        !self.is_bus_day(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date + Days::new(1);
        }
        new_date
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date - Days::new(1);
        }
        new_date
    }

    /// Add a given number of business days to a `date`, exclusive of the start.
    ///
    /// The input `date` must itself be a business day. Adding zero returns the
    /// input unchanged, and a negative `days` subtracts business days.
    fn add_bus_days(&self, date: &NaiveDateTime, days: i32) -> Result<NaiveDateTime, CalendarError> {
        if self.is_non_bus_day(date) {
            return Err(CalendarError::InvalidInput(
                "cannot add business days to an input `date` that is not a business day"
                    .to_string(),
            ));
        }
        let mut new_date = *date;
        let mut counter: i32 = 0;
        if days < 0 {
            // then we subtract business days
            while counter > days {
                new_date = self.roll_backward_bus_day(&(new_date - Days::new(1)));
                counter -= 1;
            }
        } else {
            // add business days
            while counter < days {
                new_date = self.roll_forward_bus_day(&(new_date + Days::new(1)));
                counter += 1;
            }
        }
        Ok(new_date)
    }

    /// Return the `count`-th business day counting forward from `start`, where
    /// `start` itself counts as day 1 when it is a business day.
    ///
    /// When `start` is a weekend or holiday, day 1 is the next business day
    /// after it, so `elapse_bus_days(start, 1)` is `roll_forward_bus_day(start)`.
    fn elapse_bus_days(
        &self,
        start: &NaiveDateTime,
        count: i32,
    ) -> Result<NaiveDateTime, CalendarError> {
        if count < 1 {
            return Err(CalendarError::InvalidInput(format!(
                "`count` must be a positive integer, got {}",
                count
            )));
        }
        self.add_bus_days(&self.roll_forward_bus_day(start), count - 1)
    }

    /// Return a vector of business dates between a start and end, inclusive.
    fn bus_date_range(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>, CalendarError> {
        if self.is_non_bus_day(start) || self.is_non_bus_day(end) {
            return Err(CalendarError::InvalidInput(
                "`start` and `end` for a calendar `bus_date_range` must both be valid business days"
                    .to_string(),
            ));
        }
        let mut vec = Vec::new();
        let mut sample_date = *start;
        while sample_date <= *end {
            vec.push(sample_date);
            sample_date = self.add_bus_days(&sample_date, 1)?;
        }
        Ok(vec)
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    fn cal_date_range(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut vec = Vec::new();
        let mut sample_date = *start;
        while sample_date <= *end {
            vec.push(sample_date);
            sample_date = sample_date + Days::new(1);
        }
        vec
    }

    /// Print a representation of the month of the object.
    fn print_month(&self, year: i32, month: u8) -> String {
        let _map: Vec<String> = vec![
            format!("        January {}\n", year),
            format!("       February {}\n", year),
            format!("          March {}\n", year),
            format!("          April {}\n", year),
            format!("            May {}\n", year),
            format!("           June {}\n", year),
            format!("           July {}\n", year),
            format!("         August {}\n", year),
            format!("      September {}\n", year),
            format!("        October {}\n", year),
            format!("       November {}\n", year),
            format!("       December {}\n", year),
        ];
        let mut output = _map[(month - 1) as usize].clone();
        output += "Su Mo Tu We Th Fr Sa\n";

        let month_obj = Month::try_from(month).unwrap();
        let days: u8 = month_obj.num_days(year).unwrap();
        let weekday = NaiveDate::from_ymd_opt(year, month.into(), 1)
            .unwrap()
            .weekday()
            .num_days_from_monday();
        let idx_start: u32 = (weekday + 1) % 7;

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for i in 0..days {
            let date = NaiveDate::from_ymd_opt(year, month.into(), (i + 1).into())
                .expect("`year`, `month` `day` are invalid.")
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let s: String = {
                if self.is_bus_day(&date) {
                    format!("{:>2}", i + 1)
                } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    " .".to_string()
                } else {
                    " *".to_string()
                }
            };
            let index: u32 = i as u32 + idx_start;
            arr[index as usize] = s;
        }

        for row in 0..6 {
            output += &format!(
                "{} {} {} {} {} {} {}\n",
                &arr[row * 7],
                &arr[row * 7 + 1],
                &arr[row * 7 + 2],
                &arr[row * 7 + 3],
                &arr[row * 7 + 4],
                &arr[row * 7 + 5],
                &arr[row * 7 + 6]
            );
        }
        output
    }

    /// Print a representation of a year of the object.
    fn print_year(&self, year: i32) -> String {
        let mut data: Vec<Vec<String>> = vec![];
        for i in 1..13 {
            data.push(
                self.print_month(year, i)
                    .lines()
                    .map(|s| s.to_string())
                    .collect(),
            );
        }
        let mut output = "\n".to_string();
        for i in 0..8 {
            output += &format!(
                "{}   {}   {}   {}\n",
                data[0][i], data[3][i], data[6][i], data[9][i]
            );
        }
        for i in 0..8 {
            output += &format!(
                "{}   {}   {}   {}\n",
                data[1][i], data[4][i], data[7][i], data[10][i]
            );
        }
        for i in 0..8 {
            output += &format!(
                "{}   {}   {}   {}\n",
                data[2][i], data[5][i], data[8][i], data[11][i]
            );
        }
        output += "Legend:\n";
        output += "'1-31': Business day     '.': Weekend     '*': Holiday\n";
        output
    }
}
