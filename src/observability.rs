use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("zephyrus.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("zephyrus.client.request_errors");

pub(crate) static SESSION_TURNS: Counter = Counter::new("zephyrus.session.turns");
pub(crate) static SESSION_BILLING_FAILURES: Counter =
    Counter::new("zephyrus.session.billing_failures");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_BILLING_FAILURES);
}
