use chrono::Utc;
use shared::error::AppResult;
use shared::models::{AppNotification, HotelSite, NotificationCategory, NotificationLevel, PerformanceStatus};
use shared::util::new_id;

use super::ReportService;

fn alert(
    level: NotificationLevel,
    category: NotificationCategory,
    title: &str,
    message: String,
) -> AppNotification {
    AppNotification {
        id: new_id(),
        level,
        title: title.to_string(),
        message,
        timestamp: Utc::now(),
        category,
    }
}

impl ReportService {
    /// Alerts derived from the site's current records
    pub fn notifications(&self, site: HotelSite) -> AppResult<Vec<AppNotification>> {
        let mut out = Vec::new();

        let critical = self.stock.critical_items(site)?;
        if !critical.is_empty() {
            let names: Vec<&str> = critical.iter().map(|i| i.name.as_str()).collect();
            out.push(alert(
                NotificationLevel::Danger,
                NotificationCategory::Stock,
                "Stock Bas",
                format!("Alerte : {} en seuil critique.", names.join(", ")),
            ));
        }

        let snapshot = self.dashboard(site)?;
        if snapshot.performance.status == PerformanceStatus::Bad {
            out.push(alert(
                NotificationLevel::Warning,
                NotificationCategory::Finance,
                "Performance",
                format!(
                    "Dépenses du jour ({}) au-dessus du budget ({}).",
                    snapshot.performance.expenses, snapshot.performance.budget
                ),
            ));
        }

        if snapshot.pending_commands > 0 {
            out.push(alert(
                NotificationLevel::Info,
                NotificationCategory::Restauration,
                "Commandes Chef",
                format!("{} commande(s) en attente de livraison.", snapshot.pending_commands),
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::reports::testing::reports;
    use rust_decimal::Decimal;
    use shared::models::*;

    #[test]
    fn quiet_site_has_no_alerts() {
        assert!(reports().notifications(HotelSite::Fnideq).unwrap().is_empty());
    }

    #[test]
    fn alerts_follow_the_records() {
        let reports = reports();
        let site = HotelSite::Fnideq;

        let item = reports
            .stock
            .add_item(
                site,
                StockItemCreate {
                    name: "Lait".into(),
                    category: StockCategory::Dairy,
                    unit: StockUnit::L,
                    unit_price: Decimal::from(8),
                    min_threshold: None,
                },
            )
            .unwrap();
        reports
            .stock
            .create_command(
                site,
                ChefCommandCreate {
                    product_id: item.id.clone(),
                    quantity: Decimal::from(20),
                },
            )
            .unwrap();
        reports
            .cash
            .record(
                site,
                CashRecord {
                    kind: CashKind::Exit,
                    amount: Decimal::from(90),
                    description: "Gaz".into(),
                    category: None,
                },
            )
            .unwrap();

        let alerts = reports.notifications(site).unwrap();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].level, NotificationLevel::Danger);
        assert!(alerts[0].message.contains("Lait"));
        assert_eq!(alerts[1].category, NotificationCategory::Finance);
        assert_eq!(alerts[2].category, NotificationCategory::Restauration);
    }
}
