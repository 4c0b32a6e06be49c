use serde::Serialize;

/// Form body of Mailgun's `POST /lists/{list}/members`.
#[derive(Serialize)]
pub struct MemberRequest<'a> {
    pub address: &'a str,
    pub subscribed: &'a str,
    pub upsert: &'a str,
}

impl<'a> MemberRequest<'a> {
    const YES: &'a str = "yes";

    /// A subscribed member, overwriting any existing member with the same
    /// address.
    pub fn subscribe(address: &'a str) -> Self {
        Self {
            address,
            subscribed: Self::YES,
            upsert: Self::YES,
        }
    }
}
