use contracts::domain::a004_job_worker::aggregate::{JobWorker, JobWorkerPayload};

use crate::shared::api::Resource;

pub struct JobWorkers;

impl Resource for JobWorkers {
    const PATH: &'static str = "/api/job-workers";
    type Item = JobWorker;
    type Payload = JobWorkerPayload;
}
