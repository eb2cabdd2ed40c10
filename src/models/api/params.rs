use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct ParamsGymSearch {
    #[serde(default)]
    pub location: String,
}
