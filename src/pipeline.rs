use crate::aggregator::Averager;
use crate::error::AveragerError;
use crate::group_key::GroupKey;
use crate::metric::{AggregationResult, ResultTable};
use crate::source::SampleSource;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

pub struct Pipeline;

impl Pipeline {
    /// Averages every entry of `source` with its own `Averager`. The first
    /// failing entry aborts the run and is reported with its raw key.
    pub fn run(source: &dyn SampleSource) -> Result<ResultTable, AveragerError> {
        let started = Utc::now();
        let mut table = ResultTable::new();

        for (raw_key, samples) in source.entries()? {
            let (key, result) =
                Self::average_group(&raw_key, &samples).map_err(|error| error.in_group(&raw_key))?;
            debug!(
                key = %key,
                count = result.count(),
                average = result.average(),
                "finalized group"
            );
            table
                .insert(key, result)
                .map_err(|error| error.in_group(&raw_key))?;
        }

        let elapsed = Utc::now() - started;
        info!(
            groups = table.len(),
            elapsed_ms = elapsed.num_milliseconds(),
            "aggregation finished"
        );
        Ok(table)
    }

    fn average_group(
        raw_key: &str,
        samples: &[Value],
    ) -> Result<(GroupKey, AggregationResult), AveragerError> {
        let key: GroupKey = raw_key.parse()?;
        let mut averager = Averager::new();
        for sample in samples {
            averager.accept_value(sample)?;
        }
        Ok((key, averager.finalize()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AveragerError;
    use crate::group_key::GroupKey;
    use crate::pipeline::Pipeline;
    use crate::source::{EmbeddedSource, SampleEntry, SampleSource};
    use serde_json::json;

    struct FixedSource(Vec<SampleEntry>);

    impl SampleSource for FixedSource {
        fn entries(&self) -> Result<Vec<SampleEntry>, AveragerError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_run_embedded() {
        let table = Pipeline::run(&EmbeddedSource).unwrap();
        assert_eq!(table.len(), 4);

        let boys_kg = table.get(&GroupKey::new("boys", "kg")).unwrap();
        assert_eq!(boys_kg.count(), 6);
        assert!((boys_kg.average() - 54.0).abs() < 1e-9);

        let girls_m = table.get(&GroupKey::new("girls", "m")).unwrap();
        assert_eq!(girls_m.count(), 6);
        assert!((girls_m.average() - 1.575).abs() < 1e-9);
    }

    #[test]
    fn test_run_aborts_on_malformed_key() {
        let source = FixedSource(vec![
            ("boys;kg".to_string(), vec![json!(1)]),
            ("boyskg".to_string(), vec![json!(1)]),
        ]);
        assert_eq!(
            Pipeline::run(&source).err().unwrap(),
            AveragerError::MalformedKey("boyskg".to_string()).in_group("boyskg")
        );
    }

    #[test]
    fn test_run_aborts_on_invalid_sample() {
        let source = FixedSource(vec![("girls;m".to_string(), vec![json!(1.5), json!("tall")])]);
        let error = Pipeline::run(&source).err().unwrap();
        assert_eq!(
            error,
            AveragerError::InvalidInput("\"tall\"".to_string()).in_group("girls;m")
        );
    }

    #[test]
    fn test_run_aborts_on_empty_group() {
        let source = FixedSource(vec![("girls;m".to_string(), vec![])]);
        let error = Pipeline::run(&source).err().unwrap();
        assert_eq!(error.root(), &AveragerError::EmptyAggregation);
    }

    #[test]
    fn test_run_rejects_duplicate_key() {
        let source = FixedSource(vec![
            ("boys;m".to_string(), vec![json!(1.6)]),
            ("boys;m".to_string(), vec![json!(1.7)]),
        ]);
        let error = Pipeline::run(&source).err().unwrap();
        assert_eq!(error.root(), &AveragerError::DuplicateKey("boys;m".to_string()));
    }

    #[test]
    fn test_run_propagates_source_error() {
        struct BrokenSource;

        impl SampleSource for BrokenSource {
            fn entries(&self) -> Result<Vec<SampleEntry>, AveragerError> {
                Err(AveragerError::InvalidInput("broken".to_string()))
            }
        }

        assert_eq!(
            Pipeline::run(&BrokenSource).err().unwrap(),
            AveragerError::InvalidInput("broken".to_string())
        );
    }
}
