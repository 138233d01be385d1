use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::models::{Receipt, ScoreResult};

/// 小票积分计算 (纯函数)
/// 七条规则按固定顺序逐条累加, 同时生成逐行说明;
/// 子字段解析失败只降级该条规则, 整体计算永不报错
pub fn calculate_points(receipt: &Receipt) -> ScoreResult {
    let mut points: i64 = 0;
    let mut breakdown: Vec<String> = Vec::new();

    // 1. 零售商名称: 每个 ASCII 字母/数字 1 分
    let retailer_points = receipt
        .retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as i64;
    points += retailer_points;
    breakdown.push(format!(
        "{:>6} points - retailer name has {} alphanumeric characters",
        retailer_points, retailer_points
    ));

    // 2/3. 总金额奖励: 解析失败按 0.00 处理 (0.00 同时满足两条规则)
    let total_cents = parse_cents(&receipt.total).unwrap_or(0);

    // 2. 整元奖励 50 分
    if total_cents % 100 == 0 {
        points += 50;
        breakdown.push("    50 points - total is a round dollar amount".to_string());
    }

    // 3. 0.25 整倍数奖励 25 分 (与规则 2 独立, 可叠加)
    if total_cents % 25 == 0 {
        points += 25;
        breakdown.push("    25 points - total is a multiple of 0.25".to_string());
    }

    // 4. 每两件商品 5 分, 落单的一件不计分
    let item_count = receipt.items.len();
    let pairs = item_count / 2;
    let pair_points = (pairs * 5) as i64;
    points += pair_points;
    breakdown.push(format!(
        "{:>6} points - {} items ({} pairs @ 5 points each)",
        pair_points, item_count, pairs
    ));

    // 5. 描述长度奖励: 去除首尾空白后长度为 3 的正整数倍时,
    //    加 ceil(单价 * 0.2) 分; 全空白描述不计
    for item in &receipt.items {
        let trimmed = item.short_description.trim();
        if trimmed.is_empty() || trimmed.len() % 3 != 0 {
            continue;
        }
        let price_cents = parse_cents(&item.price).unwrap_or(0);
        // ceil(price_cents / 500) 即 ceil(单价 * 0.2), 全程整数精确运算
        let item_points = (price_cents + 499).div_euclid(500);
        points += item_points;
        breakdown.push(format!(
            "{:>6} points - \"{}\" is {} characters (a multiple of 3)",
            item_points,
            trimmed,
            trimmed.len()
        ));
        breakdown.push(format!(
            "                item price of {} * 0.2 = {:.2}, rounded up is {} points",
            item.price,
            price_cents as f64 / 500.0,
            item_points
        ));
    }

    // 6. 购买日为奇数加 6 分; 日期解析失败则放弃本条
    if let Some(date) = parse_purchase_date(&receipt.purchase_date) {
        if date.day() % 2 == 1 {
            points += 6;
            breakdown.push("     6 points - purchase day is odd".to_string());
        }
    }

    // 7. 购买时间在 [14:00, 16:00) 加 10 分; 时间解析失败则放弃本条
    if let Some(time) = parse_purchase_time(&receipt.purchase_time) {
        if time.hour() >= 14 && time.hour() < 16 {
            points += 10;
            breakdown.push("    10 points - purchase time is between 2:00pm and 4:00pm".to_string());
        }
    }

    breakdown.push("  + ---------".to_string());
    breakdown.push(format!("  = {} points", points));

    ScoreResult { points, breakdown }
}

/// 十进制字符串金额解析为整数"分", 避免二进制浮点误差
/// 解析失败或精度超过分时返回 None, 由调用方按规则默认值处理
fn parse_cents(raw: &str) -> Option<i64> {
    let Ok(amount) = raw.trim().parse::<BigDecimal>() else {
        tracing::debug!("金额解析失败, 按默认值处理: {:?}", raw);
        return None;
    };
    let scaled = &amount * BigDecimal::from(100);
    let cents = scaled.to_i64()?;
    if BigDecimal::from(cents) != scaled {
        tracing::debug!("金额精度超过分, 按默认值处理: {:?}", raw);
        return None;
    }
    Some(cents)
}

fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("购买日期解析失败, 放弃奇数日规则: {:?} ({})", raw, e);
            None
        }
    }
}

fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    match NaiveTime::parse_from_str(raw, "%H:%M") {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::debug!("购买时间解析失败, 放弃下午时段规则: {:?} ({})", raw, e);
            None
        }
    }
}
