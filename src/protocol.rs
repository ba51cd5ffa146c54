//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Case;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    GetCase {
        #[serde(rename = "caseId")]
        case_id: String,
    },
    CheckSamples {
        #[serde(rename = "caseId")]
        case_id: String,
        #[serde(default)]
        samples: Vec<String>,
    },
    CheckTests {
        #[serde(rename = "caseId")]
        case_id: String,
        #[serde(default)]
        tests: Option<Value>,
    },
    CheckBacterium {
        #[serde(rename = "caseId")]
        case_id: String,
        #[serde(default, rename = "bacteriumName")]
        bacterium_name: Option<String>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Case {
        case: PlayableCaseOut,
    },
    SamplesResult(CheckSamplesOut),
    TestsResult(CheckTestsOut),
    BacteriumResult(CheckBacteriumOut),
    Error {
        message: String,
    },
}

/// Case as shown to a learner: no organism, no test groups, no completion content.
#[derive(Debug, Serialize)]
pub struct PlayableCaseOut {
    pub id: String,
    pub name: String,
    pub anamnesis: String,
    pub samples: Vec<SampleOut>,
}

#[derive(Debug, Serialize)]
pub struct SampleOut {
    pub description: String,
}

/// Convert full `Case` (internal) to the play DTO.
pub fn to_playable(c: &Case) -> PlayableCaseOut {
    PlayableCaseOut {
        id: c.id.clone(),
        name: c.name.clone(),
        anamnesis: c.anamnesis.clone(),
        samples: c
            .samples
            .iter()
            .map(|s| SampleOut { description: s.description.clone() })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct CaseSummaryOut {
    pub id: String,
    pub name: String,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct CheckSamplesIn {
    #[serde(default)]
    pub samples: Vec<String>,
}
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckSamplesOut {
    pub correct: bool,
}

/// `tests` stays untyped so a missing or non-list value surfaces as a validation error.
#[derive(Debug, Deserialize)]
pub struct CheckTestsIn {
    #[serde(default)]
    pub tests: Option<Value>,
}
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckTestsOut {
    pub correct: bool,
    pub required_done: bool,
    pub all_done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckBacteriumIn {
    #[serde(default, rename = "bacteriumName")]
    pub bacterium_name: Option<String>,
}
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckBacteriumOut {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_text: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreditOut {
    pub user: String,
    pub test_cases: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}
