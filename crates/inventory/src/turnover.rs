//! Inventory turnover rate, a standard logistics KPI.

/// Ratio of cost of goods sold to average inventory value.
///
/// `average = (beginning + ending) / 2`. A zero average yields `0.0` — an
/// explicit boundary policy, not an error.
pub fn turnover_rate(cost_of_goods_sold: f64, beginning_inventory: f64, ending_inventory: f64) -> f64 {
    let average = (beginning_inventory + ending_inventory) / 2.0;
    if average == 0.0 {
        return 0.0;
    }
    cost_of_goods_sold / average
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_rate_over_average_inventory() {
        // 850000 / ((100000 + 150000) / 2) = 850000 / 125000
        let rate = turnover_rate(850_000.0, 100_000.0, 150_000.0);
        assert!((rate - 6.8).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_average_yields_zero() {
        assert_eq!(turnover_rate(850_000.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn zero_cogs_yields_zero_rate() {
        assert_eq!(turnover_rate(0.0, 100.0, 100.0), 0.0);
    }
}
