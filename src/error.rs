/*!
The error taxonomy surfaced at the crate boundary.

Every fallible operation returns [`Result`](type.Result.html); validation
failures carry the component that rejected the input and leave the container
byte-identical to its pre-call state.
*/

error_chain! {
    errors {
        #[doc = "The scheme component does not match its grammar."]
        InvalidScheme(s: String) {
            description("The scheme component does not match its grammar.")
            display("Provided scheme value `{}` does not match the scheme grammar.", s)
        }
        #[doc = "The authority component does not parse."]
        InvalidAuthority(s: String) {
            description("The authority component does not parse.")
            display("Provided authority value `{}` does not parse.", s)
        }
        #[doc = "The host is not an IP-literal, IPv4 address, or registered name."]
        InvalidHost(s: String) {
            description("The host is not an IP-literal, IPv4 address, or registered name.")
            display("Provided host value `{}` is not an IP-literal, IPv4 address, or registered name.", s)
        }
        #[doc = "The port component contains a non-digit character."]
        InvalidPort(s: String) {
            description("The port component contains a non-digit character.")
            display("Provided port value `{}` contains a non-digit character.", s)
        }
        #[doc = "The path violates its context-sensitive production."]
        InvalidPath(s: String) {
            description("The path violates its context-sensitive production.")
            display("Provided path value `{}` violates its context-sensitive production.", s)
        }
        #[doc = "The query contains a disallowed or badly encoded character."]
        InvalidQuery(s: String) {
            description("The query contains a disallowed or badly encoded character.")
            display("Provided query value `{}` contains a disallowed or badly encoded character.", s)
        }
        #[doc = "The fragment contains a disallowed or badly encoded character."]
        InvalidFragment(s: String) {
            description("The fragment contains a disallowed or badly encoded character.")
            display("Provided fragment value `{}` contains a disallowed or badly encoded character.", s)
        }
        #[doc = "A reserved byte appeared raw where it must be percent-encoded."]
        IllegalReservedChar(b: u8, at: usize) {
            description("A reserved byte appeared raw where it must be percent-encoded.")
            display("Reserved byte 0x{:02X} at offset {} must be percent-encoded here.", b, at)
        }
        #[doc = "A `%` was not followed by two hexadecimal digits."]
        BadPctHexDig(at: usize) {
            description("A `%` was not followed by two hexadecimal digits.")
            display("The `%` at offset {} is not followed by two hexadecimal digits.", at)
        }
        #[doc = "The requested length exceeds the implementation maximum."]
        TooLarge(requested: usize) {
            description("The requested length exceeds the implementation maximum.")
            display("A URL of {} bytes exceeds the implementation maximum.", requested)
        }
    }
}
