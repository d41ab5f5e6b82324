//! Legacy fine-tune fixtures

use serde_json::json;

/// Sample fine-tune response as returned by create and retrieve
pub fn fine_tune_response() -> serde_json::Value {
    json!({
        "id": "ft-AF1WoRqd3aJAHsqc9NY7iL8F",
        "object": "fine-tune",
        "model": "curie",
        "created_at": 1614807352,
        "events": [
            {
                "object": "fine-tune-event",
                "created_at": 1614807352,
                "level": "info",
                "message": "Job enqueued. Waiting for jobs ahead to complete. Queue number: 0."
            },
            {
                "object": "fine-tune-event",
                "created_at": 1614807356,
                "level": "info",
                "message": "Job started."
            }
        ],
        "fine_tuned_model": null,
        "hyperparams": {
            "batch_size": 4,
            "learning_rate_multiplier": 0.1,
            "n_epochs": 4,
            "prompt_loss_weight": 0.1
        },
        "organization_id": "org-123",
        "result_files": [],
        "status": "pending",
        "validation_files": [],
        "training_files": [{
            "id": "file-XGinujblHPwGLSztz8cPS8XY",
            "object": "file",
            "bytes": 1547276,
            "created_at": 1610062281,
            "filename": "my-data-train.jsonl",
            "purpose": "fine-tune-train"
        }],
        "updated_at": 1614807352
    })
}

/// Minimal legacy fine-tune body with only identity fields
pub fn minimal_fine_tune_response() -> serde_json::Value {
    json!({"id": "ft-1", "object": "fine-tune", "status": "succeeded"})
}

/// Sample fine-tune list response
pub fn list_fine_tunes_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            {
                "id": "ft-AF1WoRqd3aJAHsqc9NY7iL8F",
                "object": "fine-tune",
                "model": "curie",
                "created_at": 1614807352,
                "fine_tuned_model": null,
                "hyperparams": {"n_epochs": "auto"},
                "organization_id": "org-123",
                "result_files": [],
                "status": "pending",
                "validation_files": [],
                "training_files": [],
                "updated_at": 1614807352
            }
        ]
    })
}

/// Sample fine-tune events response
pub fn fine_tune_events_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            {
                "object": "fine-tune-event",
                "created_at": 1614807352,
                "level": "info",
                "message": "Job enqueued."
            },
            {
                "object": "fine-tune-event",
                "created_at": 1614807400,
                "level": "info",
                "message": "Job succeeded."
            }
        ]
    })
}

/// Sample fine-tuned model deletion response
pub fn delete_fine_tune_response() -> serde_json::Value {
    json!({
        "id": "curie:ft-acmeco-2021-03-03-21-44-20",
        "object": "model",
        "deleted": true
    })
}

/// Sample fine-tuning job object
pub fn fine_tuning_job_response() -> serde_json::Value {
    json!({
        "id": "ftjob-abc123",
        "object": "fine_tuning.job",
        "model": "gpt-3.5-turbo-0613",
        "created_at": 1677610602,
        "finished_at": null,
        "fine_tuned_model": null,
        "organization_id": "org-123",
        "result_files": [],
        "status": "queued",
        "hyperparameters": {"n_epochs": "auto"},
        "validation_file": null,
        "training_file": "file-abc123",
        "trained_tokens": null,
        "error": null
    })
}

/// Sample fine-tuning job list with one page remaining
pub fn list_fine_tuning_jobs_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [fine_tuning_job_response()],
        "has_more": true
    })
}

/// Sample fine-tuning job events page
pub fn fine_tuning_job_events_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            {
                "object": "fine_tuning.job.event",
                "id": "ftevent-abc123",
                "created_at": 1694628985,
                "level": "info",
                "message": "Fine tuning job successfully completed",
                "type": "message",
                "data": {}
            },
            {
                "object": "fine_tuning.job.event",
                "id": "ftevent-def456",
                "created_at": 1694628984,
                "level": "info",
                "message": "Step 100/100: training loss=0.12",
                "type": "metrics",
                "data": {"step": 100, "train_loss": 0.12}
            }
        ],
        "has_more": false
    })
}
