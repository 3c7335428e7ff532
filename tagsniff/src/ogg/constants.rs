// https://xiph.org/vorbis/doc/Vorbis_I_spec.html#x1-620004.2.1
pub(super) const VORBIS_IDENT_HEAD: &[u8] = b"\x01vorbis";
pub(super) const VORBIS_COMMENT_HEAD: &[u8] = b"\x03vorbis";

// https://datatracker.ietf.org/doc/pdf/rfc7845.pdf#section-5.1
pub(super) const OPUSHEAD: &[u8] = b"OpusHead";
pub(super) const OPUSTAGS: &[u8] = b"OpusTags";

// https://xiph.org/flac/ogg_mapping.html
pub(super) const FLAC_IDENT_HEAD: &[u8] = b"\x7FFLAC";

// https://www.speex.org/docs/manual/speex-manual/node8.html
pub(super) const SPEEXHEADER: &[u8] = b"Speex   ";
