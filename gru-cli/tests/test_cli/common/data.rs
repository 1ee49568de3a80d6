/// Result set as an external query would serialize it, hosts out of order.
pub const RESULT_SET: &str = r#"{
  "x3000c0s2b0": {
    "PowerState": "Off",
    "BootOrder": ["UefiHttp", "Pxe"],
    "Attributes": {"Rome0039": "Enabled", "Rome0001": "Auto", "Unknown123": 7},
    "Error": ""
  },
  "x3000c0s1b0": {
    "PowerState": "On",
    "BootOrder": []
  }
}"#;

/// Descriptor for an attribute of another platform generation.
pub const MILAN_DESCRIPTOR: &str = r#"{
  "AttributeName": "Milan0039",
  "DefaultValue": "Auto",
  "DisplayName": "SVM Mode",
  "HelpText": "Enable/disable CPU Virtualization.",
  "ReadOnly": false,
  "Type": "Enumeration",
  "Value": [
    { "ValueDisplayName": "Disabled", "ValueName": "Disabled" },
    { "ValueDisplayName": "Enabled", "ValueName": "Enabled" }
  ]
}"#;

/// Descriptor that collides with a built-in attribute.
pub const SHADOWING_DESCRIPTOR: &str = r#"{
  "AttributeName": "Rome0039",
  "DisplayName": "Shadowed"
}"#;
