// crates/fleetver-status/src/statistics.rs
//
// Folds the application registry into per-version deployment statistics.
//
// Entries are created for infrastructure versions, for versions of active
// deployments, for versions on which an upgrade last failed, and for versions
// with a last successful production run. Other job history adds no entry.

use std::collections::{BTreeMap, BTreeSet};

use fleetver_core::{Application, DeploymentStatistics, JobError, JobStatus, Version};

/// Compute deployment statistics for all versions in use, ascending by version.
pub fn aggregate<'a, I>(infrastructure_versions: I, applications: &[Application]) -> Vec<DeploymentStatistics>
where
    I: IntoIterator<Item = &'a Version>,
{
    let seeded: BTreeMap<Version, DeploymentStatistics> = infrastructure_versions
        .into_iter()
        .map(|version| (version.clone(), DeploymentStatistics::empty(version.clone())))
        .collect();

    applications
        .iter()
        .fold(seeded, fold_application)
        .into_values()
        .collect()
}

fn fold_application(
    mut statistics: BTreeMap<Version, DeploymentStatistics>,
    application: &Application,
) -> BTreeMap<Version, DeploymentStatistics> {
    // A version running in production is in use even before any job reports on it.
    for deployment in application.deployments.iter() {
        statistics
            .entry(deployment.version.clone())
            .or_insert_with(|| DeploymentStatistics::empty(deployment.version.clone()));
    }

    for version in failing_versions(application.job_statuses.iter()) {
        update(&mut statistics, version, |s| s.with_failing(application.id.clone()));
    }

    for version in producing_versions(application.job_statuses.iter()) {
        update(&mut statistics, version, |s| s.with_producing(application.id.clone()));
    }

    statistics
}

/// Versions on which an upgrade run last failed for reasons other than capacity.
fn failing_versions<'a>(statuses: impl Iterator<Item = &'a JobStatus>) -> BTreeSet<Version> {
    statuses
        .filter_map(|status| {
            let completed = status.last_completed.as_ref()?;
            match status.job_error {
                Some(error) if completed.upgrade && error != JobError::OutOfCapacity => {
                    Some(completed.version.clone())
                }
                _ => None,
            }
        })
        .collect()
}

/// Versions with a last successful run of a production job.
fn producing_versions<'a>(statuses: impl Iterator<Item = &'a JobStatus>) -> BTreeSet<Version> {
    statuses
        .filter(|status| status.job_type.is_production())
        .filter_map(|status| status.last_success.as_ref())
        .map(|run| run.version.clone())
        .collect()
}

fn update(
    statistics: &mut BTreeMap<Version, DeploymentStatistics>,
    version: Version,
    change: impl FnOnce(&DeploymentStatistics) -> DeploymentStatistics,
) {
    let current = statistics
        .remove(&version)
        .unwrap_or_else(|| DeploymentStatistics::empty(version.clone()));
    statistics.insert(version, change(&current));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fleetver_core::{ApplicationId, JobRun, JobType, ZoneId};

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    fn prod(region: &str) -> JobType {
        JobType::Production(region.to_string())
    }

    fn find<'a>(stats: &'a [DeploymentStatistics], version: &str) -> &'a DeploymentStatistics {
        stats
            .iter()
            .find(|s| s.version() == &v(version))
            .unwrap_or_else(|| panic!("no statistics for {}", version))
    }

    #[test]
    fn test_seeds_every_infrastructure_version() {
        let infra = [v("6.1"), v("6.2")];
        let stats = aggregate(&infra, &[]);
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.failing().is_empty() && s.production().is_empty()));
    }

    #[test]
    fn test_active_deployment_without_jobs_is_represented() {
        let app = Application::new(ApplicationId::new("t:a:default")).with_deployment(
            ZoneId::new("prod", "us-east-3"),
            v("6.3"),
            Utc::now(),
        );
        let stats = aggregate(&[v("6.1")], &[app]);

        let versions: Vec<&Version> = stats.iter().map(|s| s.version()).collect();
        assert_eq!(versions, vec![&v("6.1"), &v("6.3")]);
        assert!(find(&stats, "6.3").production().is_empty());
    }

    #[test]
    fn test_failed_upgrade_marks_version_failing() {
        let id = ApplicationId::new("t:a:default");
        let app = Application::new(id.clone()).with_job_status(
            JobStatus::new(JobType::SystemTest)
                .with_failure(JobRun::new(v("6.2"), true, Utc::now()), JobError::DeploymentFailure),
        );
        let stats = aggregate(&[v("6.1")], &[app]);

        assert!(find(&stats, "6.2").failing().contains(&id));
        assert!(find(&stats, "6.1").failing().is_empty());
    }

    #[test]
    fn test_out_of_capacity_is_not_a_version_failure() {
        let app = Application::new(ApplicationId::new("t:a:default")).with_job_status(
            JobStatus::new(JobType::StagingTest)
                .with_failure(JobRun::new(v("6.2"), true, Utc::now()), JobError::OutOfCapacity),
        );
        let stats = aggregate(&[v("6.2")], &[app]);

        assert!(find(&stats, "6.2").failing().is_empty());
    }

    #[test]
    fn test_failed_redeploy_is_not_a_version_failure() {
        let app = Application::new(ApplicationId::new("t:a:default")).with_job_status(
            JobStatus::new(JobType::SystemTest)
                .with_failure(JobRun::new(v("6.2"), false, Utc::now()), JobError::Unknown),
        );
        let stats = aggregate(&[v("6.2")], &[app]);

        assert!(find(&stats, "6.2").failing().is_empty());
    }

    #[test]
    fn test_production_success_marks_version_producing() {
        let id = ApplicationId::new("t:a:default");
        let app = Application::new(id.clone())
            .with_job_status(
                JobStatus::new(prod("us-east-3")).with_success(JobRun::new(v("6.1"), false, Utc::now())),
            )
            .with_job_status(
                JobStatus::new(JobType::StagingTest).with_success(JobRun::new(v("6.4"), true, Utc::now())),
            );
        let stats = aggregate(&[v("6.1")], &[app]);

        assert!(find(&stats, "6.1").production().contains(&id));
        // Test jobs are not production, and contribute no version.
        assert!(stats.iter().all(|s| s.version() != &v("6.4")));
    }

    #[test]
    fn test_job_history_versions_are_created_on_demand() {
        let id = ApplicationId::new("t:a:default");
        let app = Application::new(id.clone()).with_job_status(
            JobStatus::new(prod("eu-west-1")).with_success(JobRun::new(v("5.9"), false, Utc::now())),
        );
        let stats = aggregate(&[v("6.1")], &[app]);

        assert_eq!(stats[0].version(), &v("5.9"));
        assert!(stats[0].production().contains(&id));
    }

    #[test]
    fn test_same_application_may_be_failing_and_producing() {
        let id = ApplicationId::new("t:a:default");
        let app = Application::new(id.clone()).with_job_status(
            JobStatus::new(prod("us-east-3"))
                .with_success(JobRun::new(v("6.2"), false, Utc::now()))
                .with_failure(JobRun::new(v("6.2"), true, Utc::now()), JobError::DeploymentFailure),
        );
        let stats = aggregate(&[v("6.2")], &[app]);

        let entry = find(&stats, "6.2");
        assert!(entry.failing().contains(&id));
        assert!(entry.production().contains(&id));
    }

    #[test]
    fn test_several_failing_jobs_on_one_version_add_application_once() {
        let id = ApplicationId::new("t:a:default");
        let run = JobRun::new(v("6.2"), true, Utc::now());
        let app = Application::new(id.clone())
            .with_job_status(JobStatus::new(JobType::SystemTest).with_failure(run.clone(), JobError::Unknown))
            .with_job_status(JobStatus::new(JobType::StagingTest).with_failure(run, JobError::DeploymentFailure));
        let stats = aggregate(&[v("6.2")], &[app]);

        assert_eq!(find(&stats, "6.2").failing().len(), 1);
    }

    #[test]
    fn test_applications_are_accumulated_across_registry() {
        let a = ApplicationId::new("t:a:default");
        let b = ApplicationId::new("t:b:default");
        let apps = vec![
            Application::new(a.clone()).with_job_status(
                JobStatus::new(prod("us-east-3")).with_success(JobRun::new(v("6.1"), false, Utc::now())),
            ),
            Application::new(b.clone()).with_job_status(
                JobStatus::new(prod("us-east-3")).with_success(JobRun::new(v("6.1"), true, Utc::now())),
            ),
        ];
        let stats = aggregate(&[v("6.1")], &apps);

        let entry = find(&stats, "6.1");
        let producing: Vec<&ApplicationId> = entry.production().iter().collect();
        assert_eq!(producing, vec![&a, &b]);
        // A successful upgrade is not a failure.
        assert!(entry.failing().is_empty());
    }
}
