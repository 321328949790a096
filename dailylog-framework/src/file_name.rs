use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // <prefix>-YYYY-MM-DD.log, e.g. laravel-2020-12-30.log
    pub static ref DAILY_LOG_FILE_RE: Regex =
        Regex::new(r"^.+-(?P<date>\d{4}-\d{2}-\d{2})\.log$").unwrap();
}

/// check `name` against a daily log naming rule
///
/// when the rule captures a `date` group, that date must also exist on the
/// calendar
pub fn is_daily_log(rule: &Regex, name: &str) -> bool {
    let Some(caps) = rule.captures(name) else {
        return false;
    };

    match caps.name("date") {
        Some(date) => NaiveDate::parse_from_str(date.as_str(), "%Y-%m-%d").is_ok(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> bool {
        is_daily_log(&DAILY_LOG_FILE_RE, name)
    }

    #[test]
    fn test_accepts_daily_log_names() {
        assert!(check("laravel-2020-12-30.log"));
        assert!(check("my-app-2021-01-01.log"));
    }

    #[test]
    fn test_rejects_other_names() {
        assert!(!check("notes.txt"));
        assert!(!check("laravel.log"));
        assert!(!check("-2020-12-30.log"));
        assert!(!check("laravel-2020-12-30.log.1"));
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(!check("laravel-2020-02-30.log"));
        assert!(!check("laravel-2020-13-01.log"));
    }

    #[test]
    fn test_rule_without_date_group_only_checks_shape() {
        let rule = Regex::new(r"^app-\d+\.log$").unwrap();
        assert!(is_daily_log(&rule, "app-7.log"));
        assert!(!is_daily_log(&rule, "app.log"));
    }
}
