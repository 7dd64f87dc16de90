use crate::errors::AppError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

static FACILITY_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid facility separator regex"));

pub const FACILITY_JOINER: &str = ", ";
pub const FILTER_ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(u64);

impl SpaceId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceType {
    Classroom,
    Laboratory,
    #[serde(rename = "Study Area")]
    StudyArea,
    #[serde(rename = "Meeting Room")]
    MeetingRoom,
    #[serde(rename = "Lecture Hall")]
    LectureHall,
}

impl SpaceType {
    pub const ALL: [SpaceType; 5] = [
        Self::Classroom,
        Self::Laboratory,
        Self::StudyArea,
        Self::MeetingRoom,
        Self::LectureHall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classroom => "Classroom",
            Self::Laboratory => "Laboratory",
            Self::StudyArea => "Study Area",
            Self::MeetingRoom => "Meeting Room",
            Self::LectureHall => "Lecture Hall",
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown space type '{}'", value)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpaceStatus {
    #[default]
    Available,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(SpaceType),
}

impl TypeFilter {
    pub fn admits(self, space_type: SpaceType) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == space_type,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(space_type) => space_type.as_str(),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == FILTER_ALL {
            return Ok(Self::All);
        }
        value.parse::<SpaceType>().map(Self::Only)
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(value: TypeFilter) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRecord {
    pub id: SpaceId,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    pub building: String,
    pub floor: Option<String>,
    pub capacity: i64,
    pub facilities: Vec<String>,
    pub status: SpaceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: Option<SpaceType>,
    pub building: String,
    pub floor: Option<String>,
    pub capacity: Option<i64>,
    pub facilities: String,
    pub status: SpaceStatus,
}

impl DraftRecord {
    pub fn from_record(record: &SpaceRecord) -> Self {
        Self {
            name: record.name.clone(),
            space_type: Some(record.space_type),
            building: record.building.clone(),
            floor: record.floor.clone(),
            capacity: Some(record.capacity),
            facilities: join_facilities(&record.facilities),
            status: record.status,
        }
    }

    pub fn facility_list(&self) -> Vec<String> {
        split_facilities(&self.facilities)
    }

    pub fn normalized_floor(&self) -> Option<String> {
        self.floor
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
    }
}

pub fn split_facilities(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    FACILITY_SEPARATOR
        .split(trimmed)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn join_facilities(facilities: &[String]) -> String {
    facilities.join(FACILITY_JOINER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "spaceId", rename_all = "kebab-case")]
pub enum EditMode {
    #[default]
    Idle,
    Creating,
    Editing(SpaceId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub mode: EditMode,
    pub draft: DraftRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryView {
    pub visible: Vec<SpaceRecord>,
    pub search_term: String,
    pub filter_type: TypeFilter,
    pub total_count: usize,
    pub session: SessionSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RegistryChange {
    Created { space: SpaceRecord },
    Updated { space: SpaceRecord },
    #[serde(rename_all = "camelCase")]
    Deleted { space_id: SpaceId },
}

impl RegistryChange {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created { .. } => "space_created",
            Self::Updated { .. } => "space_updated",
            Self::Deleted { .. } => "space_deleted",
        }
    }

    pub fn space_id(&self) -> SpaceId {
        match self {
            Self::Created { space } | Self::Updated { space } => space.id,
            Self::Deleted { space_id } => *space_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEnvelope {
    pub event_id: String,
    pub r#type: String,
    pub payload: RegistryChange,
    pub timestamp: DateTime<Utc>,
}

impl ChangeEnvelope {
    pub fn new(change: RegistryChange) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            r#type: change.event_type().to_string(),
            payload: change,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub view: RegistryView,
    pub change: Option<RegistryChange>,
}
