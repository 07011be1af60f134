// crates/fleetver-core/src/application.rs
//
// Application registry view: identifiers, active deployments per zone,
// and the last completed / last successful run of each deployment job.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::version::Version;
use crate::zone::ZoneId;

/// Identifier of an application, e.g. "tenant:app:default".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deployment job in an application's pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Builds the application package.
    Component,
    /// Runs system tests in the test environment.
    SystemTest,
    /// Runs staging tests in the staging environment.
    StagingTest,
    /// Deploys to the production zone in the given region.
    Production(String),
}

impl JobType {
    /// Whether this job deploys to a live serving environment.
    pub fn is_production(&self) -> bool {
        matches!(self, JobType::Production(_))
    }
}

/// Classification of the error that ended the last completed run of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobError {
    /// The deployment itself failed.
    DeploymentFailure,
    /// The zone had no capacity for the deployment.
    OutOfCapacity,
    /// Unclassified failure.
    Unknown,
}

/// A single run of a deployment job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRun {
    /// Platform version the job ran on.
    pub version: Version,
    /// Whether the run was triggered to upgrade the platform version,
    /// as opposed to deploying a new application revision.
    pub upgrade: bool,
    pub at: DateTime<Utc>,
}

impl JobRun {
    pub fn new(version: Version, upgrade: bool, at: DateTime<Utc>) -> Self {
        Self {
            version,
            upgrade,
            at,
        }
    }
}

/// Status of one deployment job of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub job_type: JobType,
    /// Last run that completed, successfully or not.
    pub last_completed: Option<JobRun>,
    /// Last run that completed successfully.
    pub last_success: Option<JobRun>,
    /// Error of the last completed run, if it failed.
    pub job_error: Option<JobError>,
}

impl JobStatus {
    /// A job that has never run.
    pub fn new(job_type: JobType) -> Self {
        Self {
            job_type,
            last_completed: None,
            last_success: None,
            job_error: None,
        }
    }

    /// Record a successful completion.
    pub fn with_success(mut self, run: JobRun) -> Self {
        self.last_completed = Some(run.clone());
        self.last_success = Some(run);
        self.job_error = None;
        self
    }

    /// Record a failed completion, keeping the previous last success.
    pub fn with_failure(mut self, run: JobRun, error: JobError) -> Self {
        self.last_completed = Some(run);
        self.job_error = Some(error);
        self
    }
}

/// A deployment of an application in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub zone: ZoneId,
    /// Platform version the deployment is currently running.
    pub version: Version,
    pub deployed_at: DateTime<Utc>,
}

/// An application as seen by the application registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    /// Currently active deployments, at most one per zone.
    pub deployments: Vec<Deployment>,
    /// Deployment job statuses, at most one per job type.
    pub job_statuses: Vec<JobStatus>,
}

impl Application {
    pub fn new(id: ApplicationId) -> Self {
        Self {
            id,
            deployments: Vec::new(),
            job_statuses: Vec::new(),
        }
    }

    /// Add or replace the deployment in the given zone.
    pub fn with_deployment(mut self, zone: ZoneId, version: Version, deployed_at: DateTime<Utc>) -> Self {
        self.deployments.retain(|d| d.zone != zone);
        self.deployments.push(Deployment {
            zone,
            version,
            deployed_at,
        });
        self
    }

    /// Add or replace the status of a job.
    pub fn with_job_status(mut self, status: JobStatus) -> Self {
        self.job_statuses.retain(|s| s.job_type != status.job_type);
        self.job_statuses.push(status);
        self
    }

    /// The deployment in the given zone, if any.
    pub fn deployment(&self, zone: &ZoneId) -> Option<&Deployment> {
        self.deployments.iter().find(|d| &d.zone == zone)
    }
}
