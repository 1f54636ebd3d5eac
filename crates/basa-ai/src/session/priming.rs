//! Fixed persona priming for the Javanese language assistant.

use crate::ChatTurn;

/// Hidden instruction sent to the model before any real user input.
/// Never rendered in the transcript.
pub const PRIMING_INSTRUCTION: &str = "Kamu adalah ahli bahasa jawa. Berikan contoh kata dan \
     kalimat yang sesuai unggah-ungguh basa jawa beserta artinya dalam bahasa indonesia. \
     Jawaban singkat dan faktual. Tolak pertanyaan non-sejarah.";

/// The model's scripted acknowledgment; the first visible turn of every
/// session.
pub const PRIMING_ACK: &str = "Baik! saya akan berikan kata dan kalimat yang sesuai dengan \
     unggah-ungguh basa jawa beserta artinya dalam bahasa indonesia. Apa yang ingin kamu \
     ketahui tentang basa Jawa?";

/// The two-turn context every remote session is seeded with.
pub(crate) fn priming_context() -> Vec<ChatTurn> {
    vec![
        ChatTurn::user(PRIMING_INSTRUCTION),
        ChatTurn::model(PRIMING_ACK),
    ]
}
