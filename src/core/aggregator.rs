use crate::core::handoff::extract_last_mile_number;
use crate::core::normalize::parse_timestamp;
use crate::domain::model::{TrackingEvent, TrackingResult};
use crate::domain::ports::{CarrierClient, CarrierOutcome};

/// 合併主要物流商與末端物流商的事件
pub struct TrackingAggregator<P: CarrierClient, L: CarrierClient> {
    primary: P,
    last_mile: L,
}

impl<P: CarrierClient, L: CarrierClient> TrackingAggregator<P, L> {
    pub fn new(primary: P, last_mile: L) -> Self {
        Self { primary, last_mile }
    }

    pub async fn combined_tracking(
        &self,
        tracking_number: &str,
        order_number: Option<&str>,
    ) -> TrackingResult {
        tracing::debug!(
            "Fetching {} tracking for {}",
            self.primary.courier(),
            tracking_number
        );
        let primary_outcome = self.primary.track(tracking_number).await;
        let primary_events = collapse(self.primary.courier().label(), tracking_number, primary_outcome);

        let gls_tracking = extract_last_mile_number(&primary_events);

        let last_mile_events = match &gls_tracking {
            Some(last_mile_number) => {
                tracing::info!(
                    "📦 {} handed over to {} as {}",
                    tracking_number,
                    self.last_mile.courier(),
                    last_mile_number
                );
                let last_mile_outcome = self.last_mile.track(last_mile_number).await;
                collapse(self.last_mile.courier().label(), last_mile_number, last_mile_outcome)
            }
            None => Vec::new(),
        };

        let mut events = primary_events;
        events.extend(last_mile_events);
        sort_newest_first(&mut events);

        TrackingResult {
            order_number: Some(order_number.unwrap_or(tracking_number).to_string()),
            tracking_number: Some(tracking_number.to_string()),
            gls_tracking,
            events,
            status: None,
        }
    }
}

fn collapse(courier: &str, tracking_number: &str, outcome: CarrierOutcome) -> Vec<TrackingEvent> {
    if let CarrierOutcome::Degraded(reason) = &outcome {
        tracing::warn!(
            "⚠️ {} lookup for {} degraded to empty: {}",
            courier,
            tracking_number,
            reason
        );
    }

    let events = outcome.into_events();
    if events.is_empty() {
        tracing::debug!("{} has no events for {}", courier, tracking_number);
    }
    events
}

/// 依時間由新到舊排序（穩定排序）。無法解析的時間排在最後。
pub fn sort_newest_first(events: &mut [TrackingEvent]) {
    events.sort_by_cached_key(|event| std::cmp::Reverse(parse_timestamp(&event.timestamp)));
}
