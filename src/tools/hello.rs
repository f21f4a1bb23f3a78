//! Canned time and weather tools for the hello agent.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityTime {
    pub city: String,
    pub current_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityWeather {
    pub city: String,
    pub weather: String,
}

#[crate::tool(
    name = "get_current_time",
    description = "Get the current time in a specified city",
    params(city = "City name, e.g. 'San Francisco'")
)]
pub fn get_current_time(city: String) -> CityTime {
    CityTime {
        city,
        current_time: "2024-06-01 12:00:00".into(),
    }
}

#[crate::tool(
    name = "get_weather",
    description = "Get the weather in a specified city",
    params(city = "City name, e.g. 'San Francisco'")
)]
pub fn get_weather(city: String) -> CityWeather {
    CityWeather {
        city,
        weather: "Sunny, 25°C".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::traits::Tool;
    use serde_json::json;

    #[test]
    fn time_is_canned() {
        let got = tokio_test::block_on(GetCurrentTimeTool.run(json!({ "city": "Oslo" }))).unwrap();
        assert_eq!(got, json!({ "city": "Oslo", "current_time": "2024-06-01 12:00:00" }));
    }

    #[test]
    fn weather_is_canned() {
        let got = tokio_test::block_on(GetWeatherTool.run(json!({ "city": "Lima" }))).unwrap();
        assert_eq!(got, json!({ "city": "Lima", "weather": "Sunny, 25°C" }));
    }
}
