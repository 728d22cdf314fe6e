/// Contact details of the person offering a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// The display name of the owner
    pub name: String,

    /// A phone number to get in contact
    pub phone: String,

    /// An optional WhatsApp number, if different from the phone number
    pub whatsapp: Option<String>,
}

impl Contact {
    /// The number listing viewers should message, preferring WhatsApp.
    pub fn message_number(&self) -> &str {
        self.whatsapp.as_deref().unwrap_or(&self.phone)
    }
}
