use serde::Serialize;

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeForm {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub address: String,
    pub telephone: String,
    pub gender: String,
    pub hired_date: String,
    pub department_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeNumber,
    FirstName,
    LastName,
    Position,
    Address,
    Telephone,
    Gender,
    HiredDate,
    DepartmentCode,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 9] = [
        EmployeeField::EmployeeNumber,
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Position,
        EmployeeField::Address,
        EmployeeField::Telephone,
        EmployeeField::Gender,
        EmployeeField::HiredDate,
        EmployeeField::DepartmentCode,
    ];
}

impl EmployeeForm {
    fn slot(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::EmployeeNumber => &mut self.employee_number,
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::Position => &mut self.position,
            EmployeeField::Address => &mut self.address,
            EmployeeField::Telephone => &mut self.telephone,
            EmployeeField::Gender => &mut self.gender,
            EmployeeField::HiredDate => &mut self.hired_date,
            EmployeeField::DepartmentCode => &mut self.department_code,
        }
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeNumber => &self.employee_number,
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::Position => &self.position,
            EmployeeField::Address => &self.address,
            EmployeeField::Telephone => &self.telephone,
            EmployeeField::Gender => &self.gender,
            EmployeeField::HiredDate => &self.hired_date,
            EmployeeField::DepartmentCode => &self.department_code,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        *self.slot(field) = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Phone column text; employees without a number show `N/A`.
pub fn phone_label(telephone: Option<&str>) -> &str {
    match telephone {
        Some(phone) if !phone.trim().is_empty() => phone,
        _ => "N/A",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn setting_a_field_leaves_the_others_alone() {
        for target in EmployeeField::ALL {
            let mut form = EmployeeForm::default();
            form.set(target, "value".into());
            for field in EmployeeField::ALL {
                let expected = if field == target { "value" } else { "" };
                assert_eq!(form.get(field), expected, "{:?} after editing {:?}", field, target);
            }
        }
    }

    #[test]
    fn serializes_every_field_as_typed() {
        let mut form = EmployeeForm::default();
        form.set(EmployeeField::EmployeeNumber, "EMP001".into());
        form.set(EmployeeField::HiredDate, "2024-03-01".into());
        form.set(EmployeeField::DepartmentCode, "CW".into());
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({
                "EmployeeNumber": "EMP001",
                "FirstName": "",
                "LastName": "",
                "Position": "",
                "Address": "",
                "Telephone": "",
                "Gender": "",
                "HiredDate": "2024-03-01",
                "DepartmentCode": "CW"
            })
        );
    }

    #[test]
    fn missing_phone_reads_not_available() {
        assert_eq!(phone_label(None), "N/A");
        assert_eq!(phone_label(Some("")), "N/A");
        assert_eq!(phone_label(Some("+250788123456")), "+250788123456");
    }
}
