use crate::model::drone::Drone;

/// Fields of a drone create/replace upload, after multipart decoding
#[derive(Debug, Clone, PartialEq)]
pub struct DroneForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img: Vec<u8>,
}

impl From<DroneForm> for Drone {
    fn from(form: DroneForm) -> Self {
        Drone::new(form.name, form.description, form.price, form.img)
    }
}

/// Accumulates multipart parts until every drone field has been seen
#[derive(Debug, Default)]
pub struct DroneFormBuilder {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub img: Option<Vec<u8>>,
}

impl DroneFormBuilder {
    /// Names of the required fields still missing, in a stable order
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.img.as_ref().map_or(true, |bytes| bytes.is_empty()) {
            missing.push("img");
        }
        missing
    }

    pub fn build(self) -> Result<DroneForm, String> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(format!("Missing drone fields: {}", missing.join(", ")));
        }
        let (Some(name), Some(description), Some(price), Some(img)) =
            (self.name, self.description, self.price, self.img)
        else {
            return Err("Missing drone fields".to_string());
        };
        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| format!("price must be a number, got {:?}", price))?;
        Ok(DroneForm { name, description, price, img })
    }
}
