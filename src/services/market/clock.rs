//! 美股交易时段
//!
//! 周一至周五 09:30 - 16:00（美东时间）

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

use crate::models::MarketStatus;

const OPEN_MINUTE: u32 = 9 * 60 + 30;
const CLOSE_MINUTE: u32 = 16 * 60;

/// 当前市场状态
pub fn market_status_now() -> MarketStatus {
    market_status(Utc::now().with_timezone(&New_York))
}

/// 计算给定美东时间的市场状态
pub fn market_status(now: DateTime<Tz>) -> MarketStatus {
    let weekday = now.weekday();
    let minute = now.hour() * 60 + now.minute();

    let is_weekday = !matches!(weekday, Weekday::Sat | Weekday::Sun);
    let in_session = (OPEN_MINUTE..CLOSE_MINUTE).contains(&minute);
    let is_open = is_weekday && in_session;

    let after_close = now.hour() >= 16;
    let days_ahead = match weekday {
        Weekday::Sun => 1,
        Weekday::Sat => 2,
        Weekday::Fri if after_close => 3,
        _ if after_close => 1,
        _ => 0,
    };
    let open_date = now.date_naive() + Duration::days(days_ahead);
    let next_open = open_date
        .and_hms_opt(9, 30, 0)
        .unwrap_or_else(|| open_date.and_time(NaiveTime::default()));

    let message = if is_open {
        "Market is OPEN - Real-time predictions available".to_string()
    } else {
        format!("Market is CLOSED - Next open: {} ET", next_open.format("%Y-%m-%d %H:%M"))
    };

    MarketStatus {
        is_weekday,
        is_open,
        next_open,
        message,
    }
}
