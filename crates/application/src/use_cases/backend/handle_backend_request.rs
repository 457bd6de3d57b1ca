use crate::ports::{QueryRepository, RecordRepository, ZoneRepository};
use crate::services::{ResultBuilder, SuffixResolver};
use chrono::Utc;
use ferrous_backend_domain::{
    BackendMethod, BackendRequest, BackendResponse, DomainError, HostDecomposition,
    ListParameters, LookupParameters, Query, RecordFilter, Zone, ZoneRecord, APEX_HOST,
    WILDCARD_HOST,
};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Answers one remote backend method call.
///
/// `execute` never fails: dispatch errors and persistence failures are folded
/// into an unsuccessful response carrying the error in its log.
pub struct HandleBackendRequestUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
    queries: Arc<dyn QueryRepository>,
    resolver: Arc<SuffixResolver>,
    hostmaster: Arc<str>,
    persist_queries: bool,
}

/// Mutable state of a single request/response exchange.
struct Exchange {
    query: Query,
    result: ResultBuilder,
}

impl HandleBackendRequestUseCase {
    pub fn new(
        zones: Arc<dyn ZoneRepository>,
        records: Arc<dyn RecordRepository>,
        queries: Arc<dyn QueryRepository>,
        resolver: Arc<SuffixResolver>,
        hostmaster: &str,
    ) -> Self {
        Self {
            zones,
            records,
            queries,
            resolver,
            hostmaster: Arc::from(hostmaster),
            persist_queries: true,
        }
    }

    pub fn with_query_logging(mut self, enabled: bool) -> Self {
        self.persist_queries = enabled;
        self
    }

    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn execute(&self, request: BackendRequest) -> BackendResponse {
        let mut exchange = Exchange {
            query: Query::new(request),
            result: ResultBuilder::new(self.resolver.clone(), self.hostmaster.clone()),
        };

        if let Err(e) = self.dispatch(&mut exchange).await {
            warn!(error = %e, method = %exchange.query.method(), "Backend request failed");
            exchange.result.unsuccessful();
            exchange.result.log(e.to_string());
        }

        let response = exchange.result.to_response();
        exchange.query.set_response(response.clone());

        if !self.persist_queries {
            return response;
        }

        match self.queries.save(&mut exchange.query).await {
            Ok(()) => response,
            Err(e) => {
                error!(error = %e, "Failed to persist backend query");
                exchange.result.unsuccessful();
                exchange.result.log(e.to_string());
                exchange.result.to_response()
            }
        }
    }

    async fn dispatch(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        match exchange.query.request.method() {
            BackendMethod::Initialize => {
                exchange.result.successful();
                exchange.result.log("Backend Initialized");
                Ok(())
            }
            BackendMethod::List => self.list(exchange).await,
            BackendMethod::Lookup => self.lookup(exchange).await,
            BackendMethod::Unsupported(method) => {
                warn!(method = %method, "Unsupported backend method");
                exchange.result.unsuccessful();
                exchange
                    .result
                    .log(format!("Method [{}] is not supported", method));
                Ok(())
            }
        }
    }

    async fn list(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        let params: ListParameters = exchange.query.request.parameters()?;
        let started = log_start(exchange);

        let parsed = self.resolver.parse(&params.zonename).await?;
        let zone = self.lookup_zone(exchange, &parsed).await?;

        exchange.result.soa(&zone).await?;

        exchange.query.record_ids.clear();
        let records = self
            .records
            .find_all(&RecordFilter::for_zone(zone.id))
            .await?;

        self.append_records(exchange, &zone, parsed.host.as_deref(), records)
            .await?;

        log_finish(exchange, started);
        Ok(())
    }

    async fn lookup(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        let params: LookupParameters = exchange.query.request.parameters()?;
        let started = log_start(exchange);

        let parsed = self.resolver.parse(&params.qname).await?;
        let zone = self.lookup_zone(exchange, &parsed).await?;

        if params.is_soa() {
            exchange.result.soa(&zone).await?;
            log_finish(exchange, started);
            return Ok(());
        }

        let requested_host = parsed.host.as_deref();
        let filter = RecordFilter::for_zone(zone.id)
            .with_host(requested_host.unwrap_or(APEX_HOST))
            .with_type(&params.qtype);

        let mut records = self.records.find_all(&filter).await?;

        if records.is_empty() && requested_host.is_some() {
            debug!(zone = %zone.name, "No exact host match, trying wildcard");
            records = self
                .records
                .find_all(&filter.with_host(WILDCARD_HOST))
                .await?;
        }

        self.append_records(exchange, &zone, requested_host, records)
            .await?;

        log_finish(exchange, started);
        Ok(())
    }

    async fn lookup_zone(
        &self,
        exchange: &mut Exchange,
        parsed: &HostDecomposition,
    ) -> Result<Zone, DomainError> {
        let domain = parsed
            .domain
            .as_deref()
            .ok_or_else(|| DomainError::ZoneNotFound(parsed.source.clone()))?;

        let zone = self
            .zones
            .find_active_by_name(domain)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(domain.to_string()))?;

        exchange.result.log(format!("Zone [{}] Matched", zone.name));
        exchange.query.assign_zone(zone.id, zone.user_id);
        Ok(zone)
    }

    async fn append_records(
        &self,
        exchange: &mut Exchange,
        zone: &Zone,
        requested_host: Option<&str>,
        records: Vec<ZoneRecord>,
    ) -> Result<(), DomainError> {
        if records.is_empty() {
            exchange
                .result
                .log(format!("Zone [{}] has no records", zone.name));
            return Ok(());
        }

        exchange.result.log(format!(
            "Zone [{}] has [{}] records",
            zone.name,
            records.len()
        ));

        for mut record in records {
            record.expand_host(&zone.name, requested_host);
            exchange.result.record(&record).await?;
            exchange.query.record_ids.push(record.id);
        }

        Ok(())
    }
}

fn log_start(exchange: &mut Exchange) -> i64 {
    let started = Utc::now().timestamp_millis();
    exchange.result.log(format!("Start:{}", started));
    started
}

fn log_finish(exchange: &mut Exchange, started: i64) {
    let finished = Utc::now().timestamp_millis();
    exchange.result.log(format!("Finish:{}", finished));
    exchange
        .result
        .log(format!("TimeTaken:{}", finished - started));
}
